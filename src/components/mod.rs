//! UI Components
//!
//! Leptos components for the board. All list changes go through the
//! kanban-dnd engine.

mod add_card_form;
mod board_column;
mod card_view;
mod drop_indicator;

pub use add_card_form::AddCardForm;
pub use board_column::{BoardColumn, SlotRefs};
pub use card_view::CardView;
pub use drop_indicator::DropIndicator;
