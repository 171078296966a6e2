use crate::parsers::ResultsLayout;
use crate::ranking::{RoundSchedule, TieBreak};

/// Environment variable overriding the default results page
pub const RESULTS_URL_ENV: &str = "BRIDGE_RESULTS_URL";

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub detail_base_url: &'static str,
    pub detail_page_prefix: &'static str,
    pub default_results_url: String,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 0,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            timeout_secs: 30,
            detail_base_url: "https://www.bridge.co.il/viewer/",
            detail_page_prefix: "personal1.php",
            default_results_url: "https://www.bridge.co.il/viewer/total1.php?event=26699".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RankingSettings {
    pub schedule: RoundSchedule,
    pub tie_break: TieBreak,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub layout: ResultsLayout,
    pub ranking: RankingSettings,
}

impl AppConfig {
    /// Defaults, with the results URL taken from the environment when set.
    pub fn new() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(RESULTS_URL_ENV) {
            config = config.with_results_url(url);
        }
        config
    }

    pub fn with_results_url(mut self, url: impl Into<String>) -> Self {
        self.scraper.default_results_url = url.into();
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.ranking.tie_break = tie_break;
        self
    }

    /// Explicit URL if given, else the configured default
    pub fn results_url(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .unwrap_or_else(|| self.scraper.default_results_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_schedule() {
        let config = AppConfig::default();

        assert_eq!(config.layout.vp_window, config.ranking.schedule.total_rounds());
    }

    #[test]
    fn test_results_url_prefers_explicit() {
        let config = AppConfig::default().with_results_url("https://example.org/total1.php");

        assert_eq!(config.results_url(None), "https://example.org/total1.php");
        assert_eq!(config.results_url(Some("https://other.org")), "https://other.org");
    }
}
