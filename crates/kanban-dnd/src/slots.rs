//! Slot Index
//!
//! Insertion points for a column: one slot before each card, plus the
//! end-of-column sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Card, CardId, ColumnId};

/// Wire form of the end-of-column sentinel
pub const END_SENTINEL: &str = "-1";

/// What a slot sits in front of
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlotTarget {
    /// Immediately before the given card
    Before(CardId),
    /// After the last card of the column
    End,
}

impl SlotTarget {
    pub fn parse(raw: &str) -> Self {
        if raw == END_SENTINEL {
            SlotTarget::End
        } else {
            SlotTarget::Before(CardId::from(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SlotTarget::Before(id) => id.as_str(),
            SlotTarget::End => END_SENTINEL,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, SlotTarget::End)
    }

    /// True if this slot is the one directly in front of `card`
    pub fn precedes(&self, card: &CardId) -> bool {
        matches!(self, SlotTarget::Before(id) if id == card)
    }
}

impl fmt::Display for SlotTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SlotTarget {
    fn from(raw: String) -> Self {
        SlotTarget::parse(&raw)
    }
}

impl From<SlotTarget> for String {
    fn from(target: SlotTarget) -> Self {
        target.as_str().to_string()
    }
}

/// A single insertion point within a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub column: ColumnId,
    pub target: SlotTarget,
}

impl Slot {
    pub fn new(column: ColumnId, target: SlotTarget) -> Self {
        Self { column, target }
    }
}

/// Ordered slots of one column.
///
/// Never empty: the end sentinel is stored apart from the per-card slots
/// so there is always a slot to fall back on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotIndex {
    column: ColumnId,
    leading: Vec<Slot>,
    end: Slot,
}

impl SlotIndex {
    /// Build the slots for `column` from the card order of `cards`
    pub fn for_column(column: &ColumnId, cards: &[Card]) -> Self {
        let leading = cards
            .iter()
            .filter(|card| card.is_in(column))
            .map(|card| Slot::new(column.clone(), SlotTarget::Before(card.id.clone())))
            .collect();

        Self {
            column: column.clone(),
            leading,
            end: Slot::new(column.clone(), SlotTarget::End),
        }
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    /// Slots in display order, sentinel last
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.leading.iter().chain(std::iter::once(&self.end))
    }

    pub fn len(&self) -> usize {
        self.leading.len() + 1
    }

    /// Only the sentinel is present
    pub fn is_column_empty(&self) -> bool {
        self.leading.is_empty()
    }

    /// The end-of-column sentinel
    pub fn last(&self) -> &Slot {
        &self.end
    }

    pub fn get(&self, target: &SlotTarget) -> Option<&Slot> {
        self.iter().find(|slot| &slot.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Vec<Card> {
        vec![
            Card::new("1", "A", "todo"),
            Card::new("2", "B", "doing"),
            Card::new("3", "C", "todo"),
        ]
    }

    #[test]
    fn test_slots_follow_column_order() {
        let index = SlotIndex::for_column(&ColumnId::from("todo"), &board());
        let targets: Vec<&str> = index.iter().map(|s| s.target.as_str()).collect();
        assert_eq!(targets, vec!["1", "3", "-1"]);
        assert_eq!(index.len(), 3);
        assert!(index.iter().all(|s| s.column.as_str() == "todo"));
    }

    #[test]
    fn test_empty_column_has_only_sentinel() {
        let index = SlotIndex::for_column(&ColumnId::from("done"), &board());
        assert_eq!(index.len(), 1);
        assert!(index.is_column_empty());
        assert!(index.last().target.is_end());
    }

    #[test]
    fn test_sentinel_parsing() {
        assert_eq!(SlotTarget::parse("-1"), SlotTarget::End);
        assert_eq!(SlotTarget::parse("42"), SlotTarget::Before(CardId::from("42")));
        assert_eq!(SlotTarget::End.to_string(), "-1");
    }

    #[test]
    fn test_sentinel_serializes_as_string() {
        let json = serde_json::to_string(&SlotTarget::End).unwrap();
        assert_eq!(json, r#""-1""#);
        let parsed: SlotTarget = serde_json::from_str(r#""5""#).unwrap();
        assert!(parsed.precedes(&CardId::from("5")));
    }

    #[test]
    fn test_get_slot_by_target() {
        let index = SlotIndex::for_column(&ColumnId::from("todo"), &board());
        assert!(index.get(&SlotTarget::parse("3")).is_some());
        assert!(index.get(&SlotTarget::parse("2")).is_none());
        assert!(index.get(&SlotTarget::End).is_some());
    }
}
