//! Inventory View
//!
//! The active-items tab: action buttons, the item table, and the mutually
//! exclusive add/edit panels.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AddPanel, EditPanel, InventoryTable};
use crate::context::use_manager;

#[component]
pub fn InventoryView() -> impl IntoView {
    let manager = use_manager();
    let state = manager.state();

    let delete_selected = {
        let manager = manager.clone();
        move |_| {
            let manager = manager.clone();
            spawn_local(async move {
                manager.delete_item().await;
            });
        }
    };

    view! {
        <div class="button-row">
            <button
                class="btn primary"
                disabled=move || state.with(|s| s.pending)
                on:click=move |_| state.update(|s| s.open_add_panel())
            >
                "Pridėti naują daiktą"
            </button>

            <button
                class="btn danger"
                disabled=move || state.with(|s| s.selection.active().is_none() || s.pending)
                on:click=delete_selected
            >
                "Ištrinti pasirinktą daiktą"
            </button>
        </div>

        <h2 class="section-title">"Inventorius"</h2>

        <Show when=move || !state.with(|s| s.show_add_panel)>
            <InventoryTable />
        </Show>

        <Show when=move || state.with(|s| s.selected_item().is_some() && !s.show_add_panel)>
            <EditPanel />
        </Show>

        <Show when=move || state.with(|s| s.show_add_panel)>
            <AddPanel />
        </Show>
    }
}
