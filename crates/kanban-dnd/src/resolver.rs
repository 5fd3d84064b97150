//! Nearest-Slot Resolver
//!
//! Maps a pointer coordinate along the column axis to a single slot.

use tracing::trace;

use crate::slots::{Slot, SlotIndex};

/// Offset added to every slot top before comparing with the pointer
pub const DEFAULT_BIAS: f64 = 50.0;

/// Picks the slot a drop at a given pointer position lands in.
///
/// A slot qualifies when the pointer sits above its biased top
/// (`pointer_y - (top + bias) < 0`); the qualifying slot closest to the
/// pointer wins. When nothing qualifies the pointer is below every slot and
/// the end sentinel is used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestSlotResolver {
    bias: f64,
}

impl Default for NearestSlotResolver {
    fn default() -> Self {
        Self { bias: DEFAULT_BIAS }
    }
}

impl NearestSlotResolver {
    pub fn new(bias: f64) -> Self {
        Self { bias }
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Resolve `pointer_y` against the slots of `index`.
    ///
    /// `top_of` returns the measured top of a slot. Slots without a
    /// measurement are not candidates. Ties keep the earlier slot.
    pub fn nearest<'a, F>(&self, pointer_y: f64, index: &'a SlotIndex, mut top_of: F) -> &'a Slot
    where
        F: FnMut(&Slot) -> Option<f64>,
    {
        let mut closest: Option<(f64, &'a Slot)> = None;

        for slot in index.iter() {
            let Some(top) = top_of(slot) else {
                continue;
            };
            let offset = pointer_y - (top + self.bias);
            let closer = closest.map_or(true, |(best, _)| offset > best);
            if offset < 0.0 && closer {
                closest = Some((offset, slot));
            }
        }

        match closest {
            Some((offset, slot)) => {
                trace!(column = %index.column(), target = %slot.target, offset, "resolved slot");
                slot
            }
            None => {
                trace!(column = %index.column(), pointer_y, "pointer below all slots, using end");
                index.last()
            }
        }
    }
}
