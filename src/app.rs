//! Kanban Board App
//!
//! Main application component: one column per board column.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::BoardColumn;
use crate::models::InitialBoard;
use crate::store::{store_columns, AppState};

#[component]
pub fn App(board: InitialBoard) -> impl IntoView {
    let store = Store::new(AppState::new(board));
    provide_context(store);

    let columns = store_columns(&store);

    view! {
        <div class="h-screen w-full bg-neutral-900 text-neutral-50">
            <div class="flex h-full w-full gap-3 overflow-scroll p-12">
                {columns
                    .into_iter()
                    .map(|column| view! { <BoardColumn column=column /> })
                    .collect_view()}
            </div>
        </div>
    }
}
