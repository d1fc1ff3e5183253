//! Edit Panel Component
//!
//! Form for editing the selected active item, backed by the edit draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CategorySelect;
use crate::context::use_manager;

#[component]
pub fn EditPanel() -> impl IntoView {
    let manager = use_manager();
    let state = manager.state();

    let save = {
        let manager = manager.clone();
        move |_| {
            let manager = manager.clone();
            spawn_local(async move {
                manager.save_edit().await;
            });
        }
    };

    view! {
        <div class="panel edit-panel">
            <h3>"Redaguoti pasirinktą daiktą"</h3>
            <div class="panel-grid">
                <label>
                    "Daiktas"
                    <input
                        prop:value=move || state.with(|s| s.edit_draft.name.clone())
                        on:input=move |ev| {
                            state.update(|s| s.edit_draft.set_name(event_target_value(&ev)))
                        }
                    />
                </label>
                <label>
                    "Kiekis"
                    <input
                        type="number"
                        prop:value=move || state.with(|s| s.edit_draft.quantity.clone())
                        on:input=move |ev| {
                            state.update(|s| s.edit_draft.set_quantity(event_target_value(&ev)))
                        }
                    />
                </label>
                <label>
                    "Kategorija"
                    <CategorySelect
                        value=Signal::derive(move || state.with(|s| s.edit_draft.category))
                        on_change=move |category| {
                            state.update(|s| s.edit_draft.set_category(category))
                        }
                    />
                </label>
            </div>
            <div class="panel-actions">
                <button
                    class="btn primary"
                    disabled=move || state.with(|s| s.pending)
                    on:click=save
                >
                    "Išsaugoti"
                </button>
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| state.update(|s| s.clear_active_selection())
                >
                    "Atšaukti"
                </button>
            </div>
        </div>
    }
}
