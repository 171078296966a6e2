use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{admin::admin_refresh, tournament::{get_event, get_games, get_standings, get_teams}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/event", get(get_event))
        .route("/api/teams", get(get_teams))
        .route("/api/standings/:round", get(get_standings))
        .route("/api/games/:team/:round", get(get_games))
        .route("/api/refresh", post(admin_refresh))
        .with_state(state)
}
