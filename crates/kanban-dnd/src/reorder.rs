//! Reorder Engine
//!
//! Produces the new card list for a drop. The input list is never mutated.

use tracing::{debug, info};

use crate::error::MoveRejected;
use crate::model::{Card, CardId, ColumnId};
use crate::slots::SlotTarget;

/// Move `dragged` into `target_column`, in front of `before`.
///
/// Any rejected move returns a copy of `cards` unchanged.
pub fn reorder(
    cards: &[Card],
    dragged: &CardId,
    target_column: &ColumnId,
    before: &SlotTarget,
) -> Vec<Card> {
    match try_reorder(cards, dragged, target_column, before) {
        Ok(moved) => moved,
        Err(reason) => {
            debug!(%reason, "drop skipped");
            cards.to_vec()
        }
    }
}

/// Like [`reorder`], but reports why a move did not happen
pub fn try_reorder(
    cards: &[Card],
    dragged: &CardId,
    target_column: &ColumnId,
    before: &SlotTarget,
) -> Result<Vec<Card>, MoveRejected> {
    let from = cards
        .iter()
        .position(|card| &card.id == dragged)
        .ok_or_else(|| MoveRejected::UnknownCard(dragged.clone()))?;

    if before.precedes(dragged) {
        return Err(MoveRejected::SelfDrop(dragged.clone()));
    }

    let mut rest = cards.to_vec();
    let mut moving = rest.remove(from);
    let source_column = std::mem::replace(&mut moving.column, target_column.clone());

    match before {
        SlotTarget::End => rest.push(moving),
        SlotTarget::Before(anchor) => {
            let at = rest
                .iter()
                .position(|card| &card.id == anchor)
                .ok_or_else(|| MoveRejected::UnknownSlot(anchor.clone()))?;
            rest.insert(at, moving);
        }
    }

    if &source_column != target_column {
        info!(card = %dragged, from = %source_column, to = %target_column, "card moved across columns");
    } else {
        debug!(card = %dragged, column = %target_column, before = %before, "card reordered");
    }

    Ok(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board() -> Vec<Card> {
        vec![
            Card::new("1", "A", "todo"),
            Card::new("2", "B", "todo"),
            Card::new("3", "C", "doing"),
            Card::new("4", "D", "todo"),
        ]
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn col(id: &str) -> ColumnId {
        ColumnId::from(id)
    }

    #[test]
    fn test_move_up_within_column() {
        let out = reorder(&board(), &"4".into(), &col("todo"), &SlotTarget::parse("1"));
        assert_eq!(ids(&out), vec!["4", "1", "2", "3"]);
        assert!(out.iter().all(|c| c.id.as_str() == "3" || c.column == col("todo")));
    }

    #[test]
    fn test_move_down_within_column() {
        let out = reorder(&board(), &"1".into(), &col("todo"), &SlotTarget::parse("4"));
        assert_eq!(ids(&out), vec!["2", "3", "1", "4"]);
    }

    #[test]
    fn test_move_to_end_of_other_column() {
        let out = reorder(&board(), &"1".into(), &col("doing"), &SlotTarget::End);
        assert_eq!(ids(&out), vec!["2", "3", "4", "1"]);
        assert_eq!(out[3].column, col("doing"));
        assert_eq!(out[3].title, "A");
    }

    #[test]
    fn test_move_before_card_in_other_column() {
        let out = reorder(&board(), &"2".into(), &col("doing"), &SlotTarget::parse("3"));
        assert_eq!(ids(&out), vec!["1", "2", "3", "4"]);
        assert_eq!(out[1].column, col("doing"));
    }

    #[test]
    fn test_self_drop_is_noop() {
        let cards = board();
        assert_eq!(
            try_reorder(&cards, &"2".into(), &col("doing"), &SlotTarget::parse("2")),
            Err(MoveRejected::SelfDrop("2".into()))
        );
        assert_eq!(reorder(&cards, &"2".into(), &col("doing"), &SlotTarget::parse("2")), cards);
    }

    #[test]
    fn test_unknown_card_is_noop() {
        let cards = board();
        assert_eq!(
            try_reorder(&cards, &"nonexistent-id".into(), &col("todo"), &SlotTarget::End),
            Err(MoveRejected::UnknownCard("nonexistent-id".into()))
        );
        assert_eq!(reorder(&cards, &"nonexistent-id".into(), &col("todo"), &SlotTarget::End), cards);
    }

    #[test]
    fn test_unknown_anchor_is_noop() {
        let cards = board();
        assert_eq!(
            try_reorder(&cards, &"1".into(), &col("todo"), &SlotTarget::parse("99")),
            Err(MoveRejected::UnknownSlot("99".into()))
        );
        assert_eq!(reorder(&cards, &"1".into(), &col("todo"), &SlotTarget::parse("99")), cards);
    }

    #[test]
    fn test_repeat_drop_is_stable() {
        let once = reorder(&board(), &"4".into(), &col("todo"), &SlotTarget::parse("2"));
        let twice = reorder(&once, &"4".into(), &col("todo"), &SlotTarget::parse("2"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_last_card_to_end_keeps_order() {
        let out = reorder(&board(), &"4".into(), &col("todo"), &SlotTarget::End);
        assert_eq!(out, board());
    }
}
