pub mod engine;
pub mod pairing;
pub mod schedule;
pub mod types;

pub use engine::RankingEngine;
pub use schedule::RoundSchedule;
pub use types::{PLACEHOLDER_NAME, Pairing, Ranking, Seat, Standing, TieBreak, VP_PER_MATCH};
