use anyhow::{Result, bail};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::services::ingestion::IngestionService;

pub struct ServerService {
    port: u16,
    results_url: String,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, results_url: String, config: AppConfig) -> Self {
        Self {
            port,
            results_url,
            config,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let mut ingestion = IngestionService::new(&self.config)?;
        let Some(snapshot) = ingestion.run(&self.results_url).await? else {
            bail!("No team data found at {}", self.results_url);
        };

        let state = Arc::new(AppState::new(snapshot, self.config.clone()));

        let app = create_router(state)
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
