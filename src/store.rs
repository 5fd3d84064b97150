//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use kanban_dnd::{DndConfig, GestureController};
use crate::models::{Card, Column, InitialBoard};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every card on the board. Order only matters within a column.
    pub cards: Vec<Card>,
    /// Fixed column set
    pub columns: Vec<Column>,
    /// Drag engine tunables
    pub config: DndConfig,
}

impl AppState {
    pub fn new(board: InitialBoard) -> Self {
        Self {
            cards: board.cards,
            columns: board.columns,
            config: board.config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the card list without subscribing
pub fn store_cards(store: &AppStore) -> Vec<Card> {
    store.cards().get_untracked()
}

/// Replace the card list with the result of a drop or add
pub fn store_set_cards(store: &AppStore, cards: Vec<Card>) {
    store.cards().set(cards);
}

pub fn store_columns(store: &AppStore) -> Vec<Column> {
    store.columns().get_untracked()
}

/// Gesture controller built from the current config
pub fn store_controller(store: &AppStore) -> GestureController {
    store.config().get_untracked().controller()
}

/// Reactive card count for a column header
pub fn store_count_in(store: &AppStore, column: &kanban_dnd::ColumnId) -> usize {
    store.cards().with(|cards| kanban_dnd::count_in(cards, column))
}

/// Reactive list of the cards in a column
pub fn store_cards_in(store: &AppStore, column: &kanban_dnd::ColumnId) -> Vec<Card> {
    store.cards().with(|cards| kanban_dnd::cards_in(cards, column).cloned().collect())
}
