//! Deleted Items Panel
//!
//! The recoverable trash list: deletion timestamps, restore and permanent
//! delete per row, and the retention notice. The retention window itself is
//! server-enforced; this view only displays it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_manager;
use crate::models::{Item, ItemId};

fn format_deleted_at(item: &Item) -> String {
    item.deleted_at
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[component]
pub fn DeletedPanel() -> impl IntoView {
    let manager = use_manager();
    let state = manager.state();

    let rows = move || state.with(|s| s.deleted_items.values().cloned().collect::<Vec<_>>());

    let restore_row = {
        let manager = manager.clone();
        move |id: ItemId| {
            let manager = manager.clone();
            state.update(|s| s.select_deleted(id));
            spawn_local(async move {
                manager.restore_item().await;
            });
        }
    };

    let purge_row = {
        let manager = manager.clone();
        move |id: ItemId| {
            let manager = manager.clone();
            state.update(|s| s.select_deleted(id));
            spawn_local(async move {
                manager.purge_item().await;
            });
        }
    };

    view! {
        <div class="panel removed-panel">
            <h2 class="section-title">"Ištrinti daiktai"</h2>

            <Show
                when=move || !state.with(|s| s.deleted_items.is_empty())
                fallback=|| view! { <p>"Šiuo metu nėra ištrintų daiktų."</p> }
            >
                <table class="inventorius-table">
                    <thead>
                        <tr>
                            <th>"Daiktas"</th>
                            <th>"Kiekis"</th>
                            <th>"Ištrinta"</th>
                            <th>"Veiksmas"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|item| item.id
                            children={
                                let restore_row = restore_row.clone();
                                let purge_row = purge_row.clone();
                                move |item| {
                                    let id = item.id;
                                    let restore_row = restore_row.clone();
                                    let purge_row = purge_row.clone();
                                    let is_selected =
                                        move || state.with(|s| s.selection.deleted() == Some(id));
                                    let row_class =
                                        move || if is_selected() { "selected-row" } else { "" };

                                    view! {
                                        <tr
                                            class=row_class
                                            on:click=move |_| {
                                                state.update(|s| s.select_deleted(id))
                                            }
                                        >
                                            <td>{item.name.clone()}</td>
                                            <td>{item.quantity}</td>
                                            <td>{format_deleted_at(&item)}</td>
                                            <td>
                                                <button
                                                    class="btn"
                                                    disabled=move || state.with(|s| s.pending)
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        restore_row(id);
                                                    }
                                                >
                                                    "Atstatyti"
                                                </button>
                                                <button
                                                    class="btn danger"
                                                    disabled=move || state.with(|s| s.pending)
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        purge_row(id);
                                                    }
                                                >
                                                    "Pašalinti visam"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <p class="info-text">"Ištrinti daiktai saugomi 30 dienų nuo ištrynimo datos."</p>
        </div>
    }
}
