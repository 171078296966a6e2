use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{EventSummary, StandingsResponse};
use crate::services::MatchView;
use super::AppState;

pub async fn get_event(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.current().await;
    Json(EventSummary::new(&snapshot, &state.config.ranking.schedule))
}

pub async fn get_teams(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.current().await;
    Json(snapshot.teams.clone())
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(round): Path<i64>,
) -> impl IntoResponse {
    let snapshot = state.current().await;

    match state.engine.rank(&snapshot.teams, round) {
        Some(ranking) => {
            Json(StandingsResponse::new(ranking, &state.config.ranking.schedule)).into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("No ranking for round {}", round)).into_response(),
    }
}

pub async fn get_games(
    State(state): State<Arc<AppState>>,
    Path((team, round)): Path<(String, i64)>,
) -> impl IntoResponse {
    let snapshot = state.current().await;

    let Some(ranking) = state.engine.rank(&snapshot.teams, round) else {
        return (StatusCode::NOT_FOUND, format!("No ranking for round {}", round)).into_response();
    };

    match MatchView::build(&snapshot, &ranking, &team) {
        Some(view) => Json(view).into_response(),
        None => (StatusCode::NOT_FOUND, format!("Unknown team: {}", team)).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::domain::{Game, Team, TournamentSnapshot};
    use axum::body::to_bytes;
    use axum::response::Response;
    use serde_json::Value;

    fn state() -> Arc<AppState> {
        let snapshot = TournamentSnapshot::new(
            "Spring Teams".to_string(),
            "https://example.org/total1.php".to_string(),
            vec![
                Team::new("Lions", vec![15.0, 12.0]).with_penalty(-1.0),
                Team::new("Tigers", vec![5.0, 8.0]),
                Team::new("Bears", vec![10.0, 10.0]),
            ],
            vec![Game {
                team: "Lions".to_string(),
                match_number: 2,
                board: "3".to_string(),
                contract: "4H".to_string(),
                score: "420".to_string(),
                imp: "10".to_string(),
                lead: "SK".to_string(),
            }],
        );
        Arc::new(AppState::new(snapshot, AppConfig::default()))
    }

    async fn json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_event_summary() {
        let response = get_event(State(state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["title"], "Spring Teams");
        assert_eq!(body["teamCount"], 3);
        assert_eq!(body["rounds"].as_array().unwrap().len(), 28);
    }

    #[tokio::test]
    async fn test_standings_for_round() {
        let response = get_standings(State(state()), Path(1)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["round"], 1);
        assert_eq!(body["label"], "Day 1 - Match 2");
        assert_eq!(body["standings"][0]["team"], "Lions");
        assert_eq!(body["standings"][0]["totalVps"], 26.0);
        assert_eq!(body["pairings"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_negative_round_is_not_found() {
        let response = get_standings(State(state()), Path(-1)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_games_for_team() {
        let response = get_games(State(state()), Path(("Lions".to_string(), 1)))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["matchNumber"], 2);
        assert_eq!(body["competitor"], "Tigers");
        assert_eq!(body["games"][0]["board"], "3");
    }

    #[tokio::test]
    async fn test_games_for_unknown_team() {
        let response = get_games(State(state()), Path(("Wolves".to_string(), 1)))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
