use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::EventSummary;
use crate::services::ingestion::IngestionService;
use super::AppState;

/// Re-load the tournament and swap in the new snapshot. The old snapshot
/// stays in place when the load fails.
pub async fn admin_refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let results_url = state.current().await.results_url.clone();
    log::info!("Refresh of {} started", results_url);

    let loaded = async {
        let mut ingestion = IngestionService::new(&state.config)?;
        ingestion.run(&results_url).await
    }
    .await;

    match loaded {
        Ok(Some(snapshot)) => {
            let summary = EventSummary::new(&snapshot, &state.config.ranking.schedule);
            state.replace(snapshot).await;
            log::info!("Refresh of {} completed", results_url);
            Json(summary).into_response()
        }
        Ok(None) => {
            log::warn!("Refresh of {} found no teams", results_url);
            (StatusCode::BAD_GATEWAY, "Results page has no teams").into_response()
        }
        Err(e) => {
            log::error!("Refresh of {} failed: {:#}", results_url, e);
            (StatusCode::BAD_GATEWAY, format!("Refresh failed: {:#}", e)).into_response()
        }
    }
}
