use anyhow::Result;
use log::info;

use crate::config::settings::ScraperSettings;
use crate::domain::{Game, Team};
use crate::errors::with_parse_context;
use crate::http::RateLimitedClient;
use crate::parsers::{self, ResultsLayout, ResultsPage};

/// Fetches a tournament's summary and per-team detail pages
pub struct ResultsScraper {
    client: RateLimitedClient,
    settings: ScraperSettings,
    layout: ResultsLayout,
}

impl ResultsScraper {
    pub fn new(settings: ScraperSettings, layout: ResultsLayout) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            settings,
            layout,
        })
    }

    /// Fetch and extract the results summary page.
    ///
    /// Network errors and a missing results table are errors; a table with
    /// no usable rows is `Ok(None)`.
    pub async fn fetch_results(&mut self, url: &str) -> Result<Option<ResultsPage>> {
        info!("Fetching results page {}", url);
        let html = self.client.get_text(url).await?;
        with_parse_context(parsers::extract_teams_with(&html, &self.layout), "results page")
    }

    /// Fetch and extract one team's games. A team without a detail link
    /// has none.
    pub async fn fetch_team_games(&mut self, team: &Team) -> Result<Vec<Game>> {
        let Some(href) = team.personal_url.as_deref() else {
            return Ok(Vec::new());
        };

        let url = resolve_detail_url(&self.settings, href);
        let html = self.client.get_text(&url).await?;
        Ok(parsers::extract_games(&team.name, &html))
    }
}

/// Detail links on the summary page are relative (`personal1.php?...`);
/// anything else is used as given.
pub fn resolve_detail_url(settings: &ScraperSettings, href: &str) -> String {
    if href.starts_with(settings.detail_page_prefix) {
        format!("{}{}", settings.detail_base_url, href)
    } else {
        href.to_string()
    }
}
