use serde::{Deserialize, Serialize};

use crate::domain::Team;

/// Name given to the bye opponent when the team count is odd
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// VPs shared between the two teams of a match
pub const VP_PER_MATCH: f64 = 20.0;

/// How teams with equal VPs are ordered in pairings and standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep the order of the results page
    #[default]
    OriginalOrder,
    /// Order equal teams by name
    Alphabetical,
}

/// One side of a pairing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub vp: f64,
}

impl Seat {
    pub fn of(team: &Team, round: usize) -> Self {
        Self {
            name: team.name.clone(),
            vp: team.vp_at(round),
        }
    }

    pub fn placeholder() -> Self {
        Self {
            name: PLACEHOLDER_NAME.to_string(),
            vp: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub high: Seat,
    pub low: Seat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: usize,
    pub team: String,
    pub match_vps: f64,
    pub total_vps: f64,
    pub competitor: String,
}

impl Standing {
    /// VPs the competitor took from this match
    pub fn competitor_vps(&self) -> f64 {
        VP_PER_MATCH - self.match_vps
    }
}

/// Standings and pairings computed for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// 0-based round actually used after clamping
    pub round: usize,
    pub standings: Vec<Standing>,
    pub pairings: Vec<Pairing>,
}

impl Ranking {
    pub fn standing_of(&self, team: &str) -> Option<&Standing> {
        self.standings.iter().find(|standing| standing.team == team)
    }

    /// 1-based match number shown on the detail pages
    pub fn match_number(&self) -> u32 {
        self.round as u32 + 1
    }
}
