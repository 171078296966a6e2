use log::debug;

use super::pairing::{competitors, fold_pair, order_by};
use super::types::{PLACEHOLDER_NAME, Pairing, Ranking, Seat, Standing, TieBreak};
use crate::config::settings::RankingSettings;
use crate::domain::Team;

/// Computes round standings and fold pairings from the team list.
///
/// Pure: nothing is cached between calls, every query starts from the
/// teams it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingEngine {
    total_rounds: usize,
    tie_break: TieBreak,
}

impl RankingEngine {
    pub fn new(total_rounds: usize, tie_break: TieBreak) -> Self {
        Self {
            total_rounds,
            tie_break,
        }
    }

    pub fn from_settings(settings: &RankingSettings) -> Self {
        Self::new(settings.schedule.total_rounds(), settings.tie_break)
    }

    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }

    /// Round actually ranked for a request. Negative requests mean nothing
    /// has been asked for yet; requests past the end clamp to the last round.
    pub fn effective_round(&self, round_index: i64) -> Option<usize> {
        let round = usize::try_from(round_index).ok()?;
        let last = self.total_rounds.checked_sub(1)?;
        Some(round.min(last))
    }

    /// Standings after `round_index`, or `None` when no round is selected.
    pub fn rank(&self, teams: &[Team], round_index: i64) -> Option<Ranking> {
        let round = self.effective_round(round_index)?;
        debug!("Ranking {} teams at round {}", teams.len(), round);

        let match_vps: Vec<f64> = teams.iter().map(|team| team.vp_at(round)).collect();
        let totals: Vec<f64> = teams.iter().map(|team| team.total_through(round)).collect();

        let pairs = fold_pair(&order_by(&match_vps, teams, self.tie_break));
        let partners = competitors(&pairs, teams.len());

        let standings = order_by(&totals, teams, self.tie_break)
            .into_iter()
            .enumerate()
            .map(|(rank, idx)| Standing {
                position: rank + 1,
                team: teams[idx].name.clone(),
                match_vps: match_vps[idx],
                total_vps: totals[idx],
                competitor: partners[idx]
                    .map(|partner| teams[partner].name.clone())
                    .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
            })
            .collect();

        let pairings = pairs
            .into_iter()
            .map(|(high, low)| Pairing {
                high: Seat::of(&teams[high], round),
                low: low
                    .map(|low| Seat::of(&teams[low], round))
                    .unwrap_or_else(Seat::placeholder),
            })
            .collect();

        Some(Ranking {
            round,
            standings,
            pairings,
        })
    }
}
