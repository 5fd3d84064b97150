//! Kanban Drag-and-Drop Engine
//!
//! Reordering logic for a kanban board, independent of any renderer.
//!
//! - [`SlotIndex`]: insertion points of a column, end sentinel last
//! - [`NearestSlotResolver`]: pointer position to slot, with a bias
//! - [`reorder`]: produce the new card list for a drop
//! - [`GestureController`]: drag-start / drag-over / drop / drag-leave
//!
//! Every operation borrows the card list and returns a new one.
//! Malformed drops leave the list unchanged.

pub mod board;
pub mod config;
mod error;
pub mod gesture;
pub mod model;
pub mod reorder;
pub mod resolver;
pub mod slots;


pub use board::{add_card, cards_in, count_in};
pub use config::DndConfig;
pub use error::{BoardError, ConfigError, DndError, MoveRejected, Result};
pub use gesture::{ColumnGesture, DragTransfer, GestureController, TRANSFER_KEY};
pub use model::{default_columns, Card, CardId, Column, ColumnId};
pub use reorder::{reorder, try_reorder};
pub use resolver::{NearestSlotResolver, DEFAULT_BIAS};
pub use slots::{Slot, SlotIndex, SlotTarget, END_SENTINEL};
