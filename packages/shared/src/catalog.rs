//! Static catalog of the training games served by the API.
//!
//! The catalog is built once per process. Game ids are regenerated on every
//! build, so only `key` identifies a game across restarts.

use crate::models::game::{Game, GameDomain};
use crate::models::new_id;

struct GameDescriptor {
    key: &'static str,
    title_ru: &'static str,
    title_en: &'static str,
    domain: GameDomain,
    description_ru: &'static str,
    description_en: &'static str,
    icon: &'static str,
}

const GAMES: [GameDescriptor; 6] = [
    GameDescriptor {
        key: "memory_matrix",
        title_ru: "Memory Matrix",
        title_en: "Memory Matrix",
        domain: GameDomain::Memory,
        description_ru: "Запоминай вспыхивающий узор и повторяй его. Тренирует зрительно-пространственную память.",
        description_en: "Remember the flashing pattern and repeat it. Trains visuospatial memory.",
        icon: "GridIcon",
    },
    GameDescriptor {
        key: "n_back",
        title_ru: "N-Back",
        title_en: "N-Back",
        domain: GameDomain::Memory,
        description_ru: "Сигналь, когда текущий стимул совпадает с тем, что был N шагов назад.",
        description_en: "Signal when the current stimulus matches the one N steps back.",
        icon: "RepeatIcon",
    },
    GameDescriptor {
        key: "stroop",
        title_ru: "Струп-тест",
        title_en: "Stroop Test",
        domain: GameDomain::Attention,
        description_ru: "Выбирай цвет шрифта, игнорируя слово. Тренирует селективное внимание.",
        description_en: "Choose the font color while ignoring the word. Trains selective attention.",
        icon: "PaletteIcon",
    },
    GameDescriptor {
        key: "schulte",
        title_ru: "Таблица Шульте",
        title_en: "Schulte Table",
        domain: GameDomain::Attention,
        description_ru: "Нажимай числа в порядке 1→25 как можно быстрее.",
        description_en: "Tap numbers 1→25 as fast as possible.",
        icon: "HashIcon",
    },
    GameDescriptor {
        key: "quick_math",
        title_ru: "Быстрый счёт",
        title_en: "Quick Math",
        domain: GameDomain::Speed,
        description_ru: "Решай простую арифметику на время.",
        description_en: "Solve simple arithmetic against the clock.",
        icon: "CalculatorIcon",
    },
    GameDescriptor {
        key: "hanoi",
        title_ru: "Ханойские башни",
        title_en: "Towers of Hanoi",
        domain: GameDomain::Logic,
        description_ru: "Перемести башню за минимум ходов. Планирование и рабочая память.",
        description_en: "Move the tower in minimum moves. Planning and working memory.",
        icon: "LayersIcon",
    },
];

/// Read-only list of games, in declared order.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    games: Vec<Game>,
}

impl GameCatalog {
    pub fn new() -> Self {
        GameCatalog::with_id_generator(new_id)
    }

    /// Builds the catalog, drawing one id per game from `next_id`.
    pub fn with_id_generator(mut next_id: impl FnMut() -> String) -> Self {
        let games = GAMES
            .iter()
            .map(|descriptor| Game {
                id: next_id(),
                key: descriptor.key.to_string(),
                title_ru: descriptor.title_ru.to_string(),
                title_en: descriptor.title_en.to_string(),
                domain: descriptor.domain,
                description_ru: descriptor.description_ru.to_string(),
                description_en: descriptor.description_en.to_string(),
                icon: descriptor.icon.to_string(),
            })
            .collect();
        GameCatalog { games }
    }

    pub fn list_games(&self) -> &[Game] {
        &self.games
    }
}

impl Default for GameCatalog {
    fn default() -> Self {
        GameCatalog::new()
    }
}
