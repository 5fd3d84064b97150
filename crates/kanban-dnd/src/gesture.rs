//! Gesture Controller
//!
//! Entry points for drag-start / drag-over / drop / drag-leave.
//! Highlight and "active" state live in an explicit [`ColumnGesture`]
//! passed into every call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Card, CardId, ColumnId};
use crate::reorder::reorder;
use crate::resolver::NearestSlotResolver;
use crate::slots::{Slot, SlotIndex, SlotTarget};

/// Key the dragged card id travels under in a drag data transfer
pub const TRANSFER_KEY: &str = "cardId";

/// Payload carried from drag-start to drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTransfer {
    #[serde(rename = "cardId")]
    pub card_id: CardId,
}

impl DragTransfer {
    pub fn new(card_id: CardId) -> Self {
        Self { card_id }
    }
}

/// Per-column presentation state for the current gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGesture {
    column: ColumnId,
    /// A drag is hovering this column
    active: bool,
    /// Slot currently nearest the pointer
    highlight: Option<SlotTarget>,
}

impl ColumnGesture {
    pub fn new(column: ColumnId) -> Self {
        Self {
            column,
            active: false,
            highlight: None,
        }
    }

    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn highlight(&self) -> Option<&SlotTarget> {
        self.highlight.as_ref()
    }

    pub fn is_highlighted(&self, target: &SlotTarget) -> bool {
        self.highlight.as_ref() == Some(target)
    }

    fn clear(&mut self) {
        self.active = false;
        self.highlight = None;
    }
}

/// Stateless orchestration over the resolver and the reorder engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureController {
    resolver: NearestSlotResolver,
}

impl GestureController {
    pub fn new(resolver: NearestSlotResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &NearestSlotResolver {
        &self.resolver
    }

    /// Start dragging `card`
    pub fn on_drag_start(&self, card: &Card) -> DragTransfer {
        debug!(card = %card.id, column = %card.column, "drag started");
        DragTransfer::new(card.id.clone())
    }

    /// Pointer moved over the column; returns the slot to highlight.
    ///
    /// `index` must be the slot index of `ctx`'s column.
    pub fn on_drag_over<'a, F>(
        &self,
        ctx: &mut ColumnGesture,
        pointer_y: f64,
        index: &'a SlotIndex,
        top_of: F,
    ) -> &'a Slot
    where
        F: FnMut(&Slot) -> Option<f64>,
    {
        let slot = self.resolver.nearest(pointer_y, index, top_of);
        ctx.active = true;
        ctx.highlight = Some(slot.target.clone());
        slot
    }

    /// Drop onto the column; returns the new card list.
    pub fn on_drop<F>(
        &self,
        ctx: &mut ColumnGesture,
        cards: &[Card],
        pointer_y: f64,
        index: &SlotIndex,
        top_of: F,
        transfer: &DragTransfer,
    ) -> Vec<Card>
    where
        F: FnMut(&Slot) -> Option<f64>,
    {
        ctx.clear();
        let slot = self.resolver.nearest(pointer_y, index, top_of);
        reorder(cards, &transfer.card_id, &ctx.column, &slot.target)
    }

    /// Pointer left the column
    pub fn on_drag_leave(&self, ctx: &mut ColumnGesture) {
        ctx.clear();
    }
}
