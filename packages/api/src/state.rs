use std::sync::Arc;

use shared::catalog::GameCatalog;
use shared::services::status_check_service::StatusCheckService;

#[derive(Clone)]
pub struct AppState {
    pub status_check_service: Arc<StatusCheckService>,
    pub game_catalog: Arc<GameCatalog>,
}
