use axum::{extract::State, routing::get, Json, Router};

use crate::{routes::API_PREFIX, state::AppState};
use shared::models::game::Game;

pub fn routes() -> Router<AppState> {
    Router::new().route(&format!("{}/games", API_PREFIX), get(list_games))
}

async fn list_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    Json(state.game_catalog.list_games().to_vec())
}
