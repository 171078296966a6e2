pub mod models;
pub mod progress;

pub use models::{Game, Team, TournamentSnapshot};
pub use progress::FetchProgress;
