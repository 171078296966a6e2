pub mod ingestion;
pub mod server;
pub mod session;
pub mod views;

pub use ingestion::IngestionService;
pub use session::{SessionAction, SessionState, View};
pub use views::MatchView;
