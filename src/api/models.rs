use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::TournamentSnapshot;
use crate::ranking::{Pairing, Ranking, RoundSchedule, Standing};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub title: String,
    pub results_url: String,
    pub loaded_at: DateTime<Utc>,
    pub team_count: usize,
    pub game_count: usize,
    pub rounds: Vec<String>,
}

impl EventSummary {
    pub fn new(snapshot: &TournamentSnapshot, schedule: &RoundSchedule) -> Self {
        Self {
            title: snapshot.title.clone(),
            results_url: snapshot.results_url.clone(),
            loaded_at: snapshot.loaded_at,
            team_count: snapshot.teams.len(),
            game_count: snapshot.games.len(),
            rounds: schedule.labels(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub round: usize,
    pub label: String,
    pub standings: Vec<Standing>,
    pub pairings: Vec<Pairing>,
}

impl StandingsResponse {
    pub fn new(ranking: Ranking, schedule: &RoundSchedule) -> Self {
        Self {
            round: ranking.round,
            label: schedule.label(ranking.round),
            standings: ranking.standings,
            pairings: ranking.pairings,
        }
    }
}
