use serde::Serialize;

use crate::domain::{Game, TournamentSnapshot};
use crate::ranking::Ranking;

/// One team's match in a ranked round, with the boards it played
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchView {
    pub team: String,
    pub match_number: u32,
    pub competitor: String,
    pub team_vps: f64,
    pub competitor_vps: f64,
    pub games: Vec<Game>,
}

impl MatchView {
    pub fn build(snapshot: &TournamentSnapshot, ranking: &Ranking, team: &str) -> Option<Self> {
        let standing = ranking.standing_of(team)?;
        let match_number = ranking.match_number();

        Some(Self {
            team: standing.team.clone(),
            match_number,
            competitor: standing.competitor.clone(),
            team_vps: standing.match_vps,
            competitor_vps: standing.competitor_vps(),
            games: snapshot
                .games_for(team, match_number)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}
