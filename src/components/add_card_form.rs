//! Add Card Form Component
//!
//! Toggleable form appending a new card to the end of a column.

use leptos::prelude::*;

use kanban_dnd::{add_card, board::contains_id};

use crate::models::{Card, CardId, ColumnId};
use crate::store::{store_cards, store_columns, store_set_cards, use_app_store};

/// Random id not yet used on the board
fn fresh_card_id(cards: &[Card]) -> CardId {
    loop {
        let id = CardId::from(js_sys::Math::random().to_string());
        if !contains_id(cards, &id) {
            return id;
        }
    }
}

#[component]
pub fn AddCardForm(column: ColumnId) -> impl IntoView {
    let store = use_app_store();

    let (text, set_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let cards = store_cards(&store);
        let id = fresh_card_id(&cards);
        match add_card(&cards, &store_columns(&store), &column, &text.get_untracked(), id) {
            Ok(next) => {
                store_set_cards(&store, next);
                set_text.set(String::new());
                set_adding.set(false);
            }
            Err(e) => tracing::warn!(column = %column, error = %e, "card not added"),
        }
    };

    view! {
        <Show
            when=move || adding.get()
            fallback=move || view! {
                <button
                    on:click=move |_| set_adding.set(true)
                    class="flex w-full items-center gap-1.5 px-3 py-1.5 text-xs text-neutral-400 transition-colors hover:text-neutral-50 cursor-pointer"
                >
                    <span>"Add Card"</span>
                    <span>"+"</span>
                </button>
            }
        >
            <form on:submit=on_submit.clone()>
                <textarea
                    autofocus=true
                    placeholder="Add new task..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    class="w-full rounded border border-violet-400 bg-violet-400/20 p-3 text-sm text-neutral-50 placeholder-violet-300 focus:outline-0"
                />
                <div class="mt-1.5 flex items-center justify-end gap-1.5">
                    <button
                        type="button"
                        on:click=move |_| set_adding.set(false)
                        class="px-3 py-1.5 text-xs text-neutral-400 transition-colors hover:text-neutral-50 cursor-pointer"
                    >
                        "Close"
                    </button>
                    <button
                        type="submit"
                        class="flex items-center gap-1.5 rounded bg-neutral-50 px-3 py-1.5 text-xs text-neutral-950 transition-colors hover:bg-neutral-300 cursor-pointer"
                    >
                        <span>"Add"</span>
                        <span>"+"</span>
                    </button>
                </div>
            </form>
        </Show>
    }
}
