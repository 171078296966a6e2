use anyhow::Result;
use log::{info, warn};

use crate::config::settings::AppConfig;
use crate::domain::{FetchProgress, Game, Team, TournamentSnapshot};
use crate::fetchers::ResultsScraper;

/// Loads a complete tournament: summary page, then every team's games
pub struct IngestionService {
    scraper: ResultsScraper,
}

impl IngestionService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            scraper: ResultsScraper::new(config.scraper.clone(), config.layout)?,
        })
    }

    /// Build a fresh snapshot of the tournament at `results_url`.
    ///
    /// `Ok(None)` means the results table was found but held no teams.
    pub async fn run(&mut self, results_url: &str) -> Result<Option<TournamentSnapshot>> {
        info!("=== Loading Tournament ===\n");

        info!("Step 1: Fetching team results...");
        let Some(results) = self.scraper.fetch_results(results_url).await? else {
            warn!("No team data found at {}", results_url);
            return Ok(None);
        };
        info!("  → Found {} teams in '{}'\n", results.teams.len(), results.title);

        info!("Step 2: Fetching match details...");
        let games = self.fetch_games(&results.teams).await;
        info!("  → Collected {} games\n", games.len());

        info!("=== Load Complete ===");
        Ok(Some(TournamentSnapshot::new(
            results.title,
            results_url.to_string(),
            results.teams,
            games,
        )))
    }

    async fn fetch_games(&mut self, teams: &[Team]) -> Vec<Game> {
        let mut progress = FetchProgress::new(teams.len());
        let mut games = Vec::new();

        for team in teams {
            progress.begin(&team.name);
            match self.scraper.fetch_team_games(team).await {
                Ok(team_games) => {
                    games.extend(team_games);
                    progress.loaded(&team.name);
                }
                Err(e) => {
                    warn!("Failed to load games for {}: {:#}", team.name, e);
                    progress.failed(&team.name);
                }
            }
        }

        if !progress.failed_teams().is_empty() {
            warn!("Loaded without games: {}", progress.failed_teams().join(", "));
        }
        games
    }
}
