pub mod results_scraper;

pub use results_scraper::{ResultsScraper, resolve_detail_url};
