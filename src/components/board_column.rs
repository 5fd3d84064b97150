//! Board Column Component
//!
//! One kanban column: header with count, cards with drop indicators,
//! end-of-column indicator and the add-card form.
//! Binds DOM drag events to the engine's gesture controller.

use std::collections::HashMap;

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::DragEvent;

use kanban_dnd::{ColumnGesture, DragTransfer, Slot, SlotIndex, SlotTarget, TRANSFER_KEY};

use crate::components::{AddCardForm, CardView, DropIndicator};
use crate::models::{Card, Column};
use crate::store::{store_cards, store_cards_in, store_controller, store_count_in, store_set_cards, use_app_store};

/// Measured drop indicators of a column, keyed by the slot they render
pub type SlotRefs = StoredValue<HashMap<SlotTarget, NodeRef<Div>>>;

/// Top of a slot's indicator in viewport coordinates, if it is mounted
fn slot_top(refs: SlotRefs, slot: &Slot) -> Option<f64> {
    refs.with_value(|map| {
        map.get(&slot.target)
            .and_then(|node| node.get_untracked())
            .map(|el| el.get_bounding_client_rect().top())
    })
}

/// Dragged card id from the DOM transfer, if any
fn read_transfer(ev: &DragEvent) -> Option<DragTransfer> {
    let raw = ev.data_transfer()?.get_data(TRANSFER_KEY).ok()?;
    if raw.is_empty() {
        return None;
    }
    Some(DragTransfer::new(raw.into()))
}

#[component]
pub fn BoardColumn(column: Column) -> impl IntoView {
    let store = use_app_store();

    let column_id = column.id.clone();
    let gesture = RwSignal::new(ColumnGesture::new(column_id.clone()));
    let refs: SlotRefs = StoredValue::new(HashMap::new());

    let on_dragover = {
        let column_id = column_id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            let cards = store_cards(&store);
            let index = SlotIndex::for_column(&column_id, &cards);
            let mut ctx = gesture.get_untracked();
            store_controller(&store).on_drag_over(&mut ctx, ev.client_y() as f64, &index, |slot| {
                slot_top(refs, slot)
            });
            if ctx != gesture.get_untracked() {
                gesture.set(ctx);
            }
        }
    };

    let on_dragleave = move |_: DragEvent| {
        gesture.update(|ctx| store_controller(&store).on_drag_leave(ctx));
    };

    let on_drop = {
        let column_id = column_id.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            let mut ctx = gesture.get_untracked();
            let Some(transfer) = read_transfer(&ev) else {
                store_controller(&store).on_drag_leave(&mut ctx);
                gesture.set(ctx);
                tracing::warn!(column = %column_id, "drop without a card id");
                return;
            };

            let cards = store_cards(&store);
            let index = SlotIndex::for_column(&column_id, &cards);
            let next = store_controller(&store).on_drop(
                &mut ctx,
                &cards,
                ev.client_y() as f64,
                &index,
                |slot| slot_top(refs, slot),
                &transfer,
            );
            gesture.set(ctx);
            if next != cards {
                store_set_cards(&store, next);
            }
        }
    };

    let header_id = column_id.clone();
    let count = move || store_count_in(&store, &header_id);

    let cards_id = column_id.clone();
    let column_cards = move || store_cards_in(&store, &cards_id);

    let is_active = move || gesture.with(|ctx| ctx.is_active());

    view! {
        <div class="w-56 shrink-0">
            <div class="mb-3 flex items-center justify-between">
                <h3 class=format!("font-medium {}", column.color)>{column.title.clone()}</h3>
                <span class="rounded text-sm text-neutral-400">{count}</span>
            </div>
            <div
                class=move || {
                    if is_active() {
                        "h-full w-full transition-colors bg-neutral-800/50"
                    } else {
                        "h-full w-full transition-colors bg-neutral-800/0"
                    }
                }
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=column_cards
                    key=|card: &Card| card.id.clone()
                    children=move |card: Card| view! { <CardView card=card gesture=gesture refs=refs /> }
                />
                <DropIndicator target=SlotTarget::End gesture=gesture refs=refs />
                <AddCardForm column=column_id.clone() />
            </div>
        </div>
    }
}
