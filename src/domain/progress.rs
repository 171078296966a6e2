use log::{debug, info};

/// Team detail pages loaded so far, reported the way a status line would:
/// the team being loaded, then a summary every ten teams and at the end.
pub struct FetchProgress {
    total: usize,
    loaded: usize,
    failed: Vec<String>,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            loaded: 0,
            failed: Vec::new(),
        }
    }

    /// Status line for the team about to be fetched
    pub fn status(&self, team: &str) -> String {
        format!("Loading games for {} ({}/{})", team, self.done() + 1, self.total)
    }

    pub fn begin(&self, team: &str) {
        debug!("  → {}", self.status(team));
    }

    pub fn loaded(&mut self, team: &str) {
        self.loaded += 1;
        self.report(team);
    }

    pub fn failed(&mut self, team: &str) {
        self.failed.push(team.to_string());
        self.report(team);
    }

    pub fn done(&self) -> usize {
        self.loaded + self.failed.len()
    }

    /// Teams whose detail page could not be loaded, in fetch order
    pub fn failed_teams(&self) -> &[String] {
        &self.failed
    }

    fn report(&self, last_team: &str) {
        let done = self.done();
        if done % 10 == 0 || done == self.total {
            info!(
                "  → Progress: {}/{} teams, last {} ({} without games)",
                done,
                self.total,
                last_team,
                self.failed.len()
            );
        }
    }
}
