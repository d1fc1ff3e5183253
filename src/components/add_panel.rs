//! Add Panel Component
//!
//! Form for creating a new item, backed by the new-item draft.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CategorySelect;
use crate::context::use_manager;

#[component]
pub fn AddPanel() -> impl IntoView {
    let manager = use_manager();
    let state = manager.state();

    let submit = {
        let manager = manager.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            let manager = manager.clone();
            spawn_local(async move {
                manager.add_item().await;
            });
        }
    };

    view! {
        <form class="panel add-panel" on:submit=submit>
            <h3>"Pridėti naują daiktą"</h3>
            <div class="panel-grid">
                <label>
                    "Daiktas"
                    <input
                        placeholder="Item name"
                        prop:value=move || state.with(|s| s.new_item.name.clone())
                        on:input=move |ev| {
                            state.update(|s| s.new_item.set_name(event_target_value(&ev)))
                        }
                    />
                </label>
                <label>
                    "Kiekis"
                    <input
                        type="number"
                        placeholder="Quantity"
                        prop:value=move || state.with(|s| s.new_item.quantity.clone())
                        on:input=move |ev| {
                            state.update(|s| s.new_item.set_quantity(event_target_value(&ev)))
                        }
                    />
                </label>
                <label>
                    "Kategorija"
                    <CategorySelect
                        value=Signal::derive(move || state.with(|s| s.new_item.category))
                        on_change=move |category| {
                            state.update(|s| s.new_item.set_category(category))
                        }
                    />
                </label>
            </div>
            <div class="panel-actions">
                <button
                    type="submit"
                    class="btn primary"
                    disabled=move || state.with(|s| s.pending)
                >
                    "Pridėti daiktą"
                </button>
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| state.update(|s| s.close_add_panel())
                >
                    "Atšaukti"
                </button>
            </div>
        </form>
    }
}
