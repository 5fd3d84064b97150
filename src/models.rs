//! Frontend Models
//!
//! Board seed file and re-exports of the engine's card types.

use serde::Deserialize;

use kanban_dnd::{add_card, default_columns, DndConfig};
pub use kanban_dnd::{Card, CardId, Column, ColumnId};

/// Seed data bundled with the app
const BOARD_SEED: &str = include_str!("../assets/board.json");

/// Initial board contents
#[derive(Debug, Clone, Deserialize)]
pub struct BoardSeed {
    #[serde(default)]
    pub config: DndConfig,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// A fully validated starting board
#[derive(Debug, Clone)]
pub struct InitialBoard {
    pub config: DndConfig,
    pub columns: Vec<Column>,
    pub cards: Vec<Card>,
}

impl BoardSeed {
    pub fn bundled() -> kanban_dnd::Result<Self> {
        Self::parse(BOARD_SEED)
    }

    pub fn parse(raw: &str) -> kanban_dnd::Result<Self> {
        let seed: Self = serde_json::from_str(raw).map_err(kanban_dnd::ConfigError::from)?;
        Ok(seed)
    }

    /// Replay the seed cards through the add-card flow so ids and columns are checked
    pub fn into_board(self) -> kanban_dnd::Result<InitialBoard> {
        self.config.validate()?;
        let columns = default_columns();
        let mut cards = Vec::with_capacity(self.cards.len());
        for card in self.cards {
            cards = add_card(&cards, &columns, &card.column, &card.title, card.id)?;
        }
        Ok(InitialBoard {
            config: self.config,
            columns,
            cards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_seed_is_valid() {
        let board = BoardSeed::bundled().unwrap().into_board().unwrap();
        assert_eq!(board.columns.len(), 4);
        assert!(!board.cards.is_empty());
        assert_eq!(board.config, DndConfig::default());
    }

    #[test]
    fn test_seed_with_duplicate_id_is_rejected() {
        let raw = r#"{"cards": [
            {"id": "1", "title": "A", "column": "todo"},
            {"id": "1", "title": "B", "column": "doing"}
        ]}"#;
        let err = BoardSeed::parse(raw).unwrap().into_board().unwrap_err();
        assert!(matches!(
            err,
            kanban_dnd::DndError::Board(kanban_dnd::BoardError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_seed_without_config_uses_defaults() {
        let seed = BoardSeed::parse(r#"{"cards": []}"#).unwrap();
        assert_eq!(seed.config.bias, 50.0);
    }
}
