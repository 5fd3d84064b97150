//! Kanban Board Frontend Entry Point

mod app;
mod components;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use models::BoardSeed;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match BoardSeed::bundled().and_then(BoardSeed::into_board) {
        Ok(board) => {
            tracing::info!(cards = board.cards.len(), "board loaded");
            mount_to_body(move || view! { <App board=board.clone() /> });
        }
        Err(e) => tracing::error!(error = %e, "invalid board seed"),
    }
}
