use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::settings::AppConfig;
use crate::domain::TournamentSnapshot;
use crate::ranking::RankingEngine;

pub mod admin;
pub mod tournament;

/// Shared server state. The snapshot itself is immutable; the lock only
/// guards swapping in a refreshed one.
pub struct AppState {
    pub snapshot: RwLock<Arc<TournamentSnapshot>>,
    pub config: AppConfig,
    pub engine: RankingEngine,
}

impl AppState {
    pub fn new(snapshot: TournamentSnapshot, config: AppConfig) -> Self {
        let engine = RankingEngine::from_settings(&config.ranking);
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            config,
            engine,
        }
    }

    pub async fn current(&self) -> Arc<TournamentSnapshot> {
        self.snapshot.read().await.clone()
    }

    pub async fn replace(&self, snapshot: TournamentSnapshot) {
        *self.snapshot.write().await = Arc::new(snapshot);
    }
}
