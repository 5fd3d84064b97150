//! Board Operations
//!
//! Column filtering and the add-card flow.

use tracing::info;

use crate::error::BoardError;
use crate::model::{Card, CardId, Column, ColumnId};

/// Cards of `column` in display order
pub fn cards_in<'a>(cards: &'a [Card], column: &'a ColumnId) -> impl Iterator<Item = &'a Card> + 'a {
    cards.iter().filter(move |card| card.is_in(column))
}

/// Number of cards shown in a column header
pub fn count_in(cards: &[Card], column: &ColumnId) -> usize {
    cards_in(cards, column).count()
}

pub fn contains_id(cards: &[Card], id: &CardId) -> bool {
    cards.iter().any(|card| &card.id == id)
}

/// Append a new card to the end of `column`.
///
/// The title is trimmed before use.
pub fn add_card(
    cards: &[Card],
    columns: &[Column],
    column: &ColumnId,
    title: &str,
    id: CardId,
) -> Result<Vec<Card>, BoardError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::EmptyTitle);
    }
    if !columns.iter().any(|c| &c.id == column) {
        return Err(BoardError::UnknownColumn(column.clone()));
    }
    if contains_id(cards, &id) {
        return Err(BoardError::DuplicateId(id));
    }

    info!(card = %id, column = %column, "card added");
    let mut next = cards.to_vec();
    next.push(Card::new(id, title, column.clone()));
    Ok(next)
}
