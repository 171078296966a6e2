use serde::{Deserialize, Serialize};

/// Tournament calendar: a fixed number of match days with the same
/// number of matches on each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSchedule {
    pub days: usize,
    pub matches_per_day: usize,
}

impl Default for RoundSchedule {
    fn default() -> Self {
        Self {
            days: 4,
            matches_per_day: 7,
        }
    }
}

impl RoundSchedule {
    pub fn total_rounds(&self) -> usize {
        self.days * self.matches_per_day
    }

    /// Label of a 0-based round; rounds past the end get the last label.
    pub fn label(&self, round: usize) -> String {
        let round = round.min(self.total_rounds().saturating_sub(1));
        let day = round / self.matches_per_day.max(1) + 1;
        format!("Day {} - Match {}", day, round + 1)
    }

    pub fn labels(&self) -> Vec<String> {
        (0..self.total_rounds()).map(|round| self.label(round)).collect()
    }
}
