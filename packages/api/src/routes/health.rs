use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::{routes::API_PREFIX, state::AppState};

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct RootResponse {
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(API_PREFIX, get(root))
        .route(&format!("{}/", API_PREFIX), get(root))
}

/// Liveness probe.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_message() {
        let response = root().await;
        assert_eq!(response.0.message, "Hello World");
    }

    #[tokio::test]
    async fn test_root_serializes_to_single_field() {
        let response = root().await;
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Hello World"}));
    }
}
