//! Drop Indicator Component
//!
//! A horizontal line marking one slot of a column. Lit while it is the
//! slot nearest the pointer.

use leptos::html::Div;
use leptos::prelude::*;

use kanban_dnd::{ColumnGesture, SlotTarget};

use crate::components::SlotRefs;

#[component]
pub fn DropIndicator(
    /// Slot this indicator renders
    target: SlotTarget,
    gesture: RwSignal<ColumnGesture>,
    refs: SlotRefs,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    refs.update_value(|map| {
        map.insert(target.clone(), node_ref);
    });

    let cleanup_target = target.clone();
    on_cleanup(move || {
        refs.update_value(|map| {
            map.remove(&cleanup_target);
        });
    });

    let column = gesture.with_untracked(|ctx| ctx.column().to_string());
    let before = target.to_string();
    let is_lit = move || gesture.with(|ctx| ctx.is_highlighted(&target));

    view! {
        <div
            node_ref=node_ref
            data-before=before
            data-column=column
            class="my-0.5 h-0.5 w-full bg-violet-400"
            style=move || if is_lit() { "opacity: 1;" } else { "opacity: 0;" }
        />
    }
}
