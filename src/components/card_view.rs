//! Card Component
//!
//! A draggable card, preceded by the drop indicator for its slot.

use leptos::prelude::*;
use web_sys::DragEvent;

use kanban_dnd::{ColumnGesture, SlotTarget, TRANSFER_KEY};

use crate::components::{DropIndicator, SlotRefs};
use crate::models::Card;
use crate::store::{store_controller, use_app_store};

#[component]
pub fn CardView(card: Card, gesture: RwSignal<ColumnGesture>, refs: SlotRefs) -> impl IntoView {
    let store = use_app_store();
    let target = SlotTarget::Before(card.id.clone());
    let title = card.title.clone();

    let on_dragstart = move |ev: DragEvent| {
        let transfer = store_controller(&store).on_drag_start(&card);
        if let Some(dt) = ev.data_transfer() {
            if dt.set_data(TRANSFER_KEY, transfer.card_id.as_str()).is_err() {
                tracing::warn!(card = %transfer.card_id, "could not write drag data");
            }
        }
    };

    view! {
        <DropIndicator target=target gesture=gesture refs=refs />
        <div
            draggable="true"
            on:dragstart=on_dragstart
            class="cursor-grab rounded border border-neutral-700 bg-neutral-800 p-3 active:cursor-grabbing"
        >
            <p class="text-sm text-neutral-100">{title}</p>
        </div>
    }
}
