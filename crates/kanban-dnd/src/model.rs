//! Board Models
//!
//! Cards, columns and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique card identifier (unique across the whole board)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Column key, e.g. `todo` or `doing`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: ColumnId,
}

impl Card {
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, column: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column: column.into(),
        }
    }

    pub fn is_in(&self, column: &ColumnId) -> bool {
        &self.column == column
    }
}

/// Column definition. The column set is fixed for the lifetime of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    /// Display title shown in the column header
    pub title: String,
    /// Heading color class (presentation only)
    pub color: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
        }
    }
}

/// The four columns every new board starts with
pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("backlog", "Backlog", "text-neutral-500"),
        Column::new("todo", "TODO", "text-yellow-200"),
        Column::new("doing", "In progress", "text-blue-200"),
        Column::new("done", "Complete", "text-emerald-200"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("1", "Write docs", "todo");
        assert_eq!(card.id.as_str(), "1");
        assert_eq!(card.title, "Write docs");
        assert!(card.is_in(&ColumnId::from("todo")));
        assert!(!card.is_in(&ColumnId::from("doing")));
    }

    #[test]
    fn test_card_serializes_flat_ids() {
        let card = Card::new("7", "Ship it", "done");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"id":"7","title":"Ship it","column":"done"}"#);
    }

    #[test]
    fn test_default_columns_are_unique() {
        let columns = default_columns();
        assert_eq!(columns.len(), 4);
        for (i, a) in columns.iter().enumerate() {
            assert!(columns[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
