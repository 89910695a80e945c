use serde::{Deserialize, Serialize};

/// Cognitive area a game trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameDomain {
    Memory,
    Attention,
    Speed,
    Logic,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Game {
    pub id: String,
    pub key: String,
    pub title_ru: String,
    pub title_en: String,
    pub domain: GameDomain,
    pub description_ru: String,
    pub description_en: String,
    /// Icon name resolved by the frontend.
    pub icon: String,
}
