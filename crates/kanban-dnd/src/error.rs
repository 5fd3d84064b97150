//! Engine Errors

use thiserror::Error;

use crate::model::{CardId, ColumnId};

/// Result alias over [`DndError`]
pub type Result<T> = std::result::Result<T, DndError>;

/// Why a drop was turned into a no-op
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("card {0} is not on the board")]
    UnknownCard(CardId),
    #[error("card {0} was dropped onto its own slot")]
    SelfDrop(CardId),
    #[error("no card {0} to insert before")]
    UnknownSlot(CardId),
}

/// Add-card validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("card title is empty")]
    EmptyTitle,
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),
    #[error("card id already in use: {0}")]
    DuplicateId(CardId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bias must be a finite number, got {0}")]
    InvalidBias(f64),
}

/// Top-level engine error
#[derive(Debug, Error)]
pub enum DndError {
    #[error(transparent)]
    Move(#[from] MoveRejected),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
