use axum::{extract::State, routing::post, Json, Router};
use tracing::error;

use crate::{error::ApiError, routes::API_PREFIX, state::AppState};
use shared::models::status_check::requests::StatusCheckCreate;
use shared::models::status_check::StatusCheck;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        &format!("{}/status", API_PREFIX),
        post(create_status_check).get(list_status_checks),
    )
}

async fn create_status_check(
    State(state): State<AppState>,
    Json(payload): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>, ApiError> {
    state
        .status_check_service
        .create_status_check(&payload.client_name)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to record status check for {}: {}",
                payload.client_name, e
            );
            ApiError::from(e)
        })
}

async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    state
        .status_check_service
        .list_status_checks()
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to list status checks: {}", e);
            ApiError::from(e)
        })
}
