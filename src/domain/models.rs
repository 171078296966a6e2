use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One team row of the results summary page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    /// VPs per round, index = 0-based round
    pub matches: Vec<f64>,
    #[serde(default)]
    pub penalty: f64,
    pub personal_url: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, matches: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            matches,
            penalty: 0.0,
            personal_url: None,
        }
    }

    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_personal_url(mut self, url: impl Into<String>) -> Self {
        self.personal_url = Some(url.into());
        self
    }

    /// VPs scored in `round`; rounds past the scraped length count as 0.
    pub fn vp_at(&self, round: usize) -> f64 {
        self.matches.get(round).copied().unwrap_or(0.0)
    }

    /// Cumulative VPs through `round` inclusive, penalty applied once.
    pub fn total_through(&self, round: usize) -> f64 {
        let scored: f64 = self.matches.iter().take(round + 1).sum();
        scored + self.penalty
    }

    pub fn total(&self) -> f64 {
        self.matches.iter().sum::<f64>() + self.penalty
    }
}

/// One played board from a team's detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub team: String,
    /// 1-based match number
    #[serde(rename = "match")]
    pub match_number: u32,
    pub board: String,
    pub contract: String,
    pub score: String,
    pub imp: String,
    pub lead: String,
}

/// Everything loaded for one tournament. Never mutated; a refresh builds
/// a new snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSnapshot {
    pub title: String,
    pub results_url: String,
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    pub loaded_at: DateTime<Utc>,
}

impl TournamentSnapshot {
    pub fn new(title: String, results_url: String, teams: Vec<Team>, games: Vec<Game>) -> Self {
        Self {
            title,
            results_url,
            teams,
            games,
            loaded_at: Utc::now(),
        }
    }

    pub fn find_team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.name == name)
    }

    pub fn team_names(&self) -> Vec<&str> {
        self.teams.iter().map(|team| team.name.as_str()).collect()
    }

    /// Games of `team` in the 1-based `match_number`, in page order
    pub fn games_for(&self, team: &str, match_number: u32) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|game| game.team == team && game.match_number == match_number)
            .collect()
    }
}
