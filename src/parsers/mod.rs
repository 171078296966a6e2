pub mod games;
pub mod numeric;
pub mod schema;
pub mod teams;

pub use games::extract_games;
pub use numeric::{ParsedNumber, parse_or_default};
pub use schema::ResultsLayout;
pub use teams::{ResultsPage, extract_teams, extract_teams_with};
