pub mod game;
pub mod status_check;

use uuid::Uuid;

/// Returns a fresh random identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
