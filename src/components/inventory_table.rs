//! Inventory Table Component
//!
//! Active items in category display order; clicking a row selects it and
//! seeds the edit panel. While a row is selected the table collapses to just
//! that row, mirroring the edit workflow.

use leptos::prelude::*;

use crate::context::use_manager;

#[component]
pub fn InventoryTable() -> impl IntoView {
    let state = use_manager().state();

    let rows = move || {
        state.with(|s| {
            let selected = s.selection.active();
            s.sorted_items()
                .into_iter()
                .filter(|item| selected.is_none_or(|id| item.id == id))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <table class="inventorius-table">
            <thead>
                <tr>
                    <th>"Daiktas"</th>
                    <th>"Kiekis"</th>
                    <th class="select-col">"Pasirinkti"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|item| (item.id, item.name.clone(), item.quantity, item.category.rank())
                    children=move |item| {
                        let id = item.id;
                        let is_selected = move || state.with(|s| s.selection.active() == Some(id));
                        let row_class = move || if is_selected() { "selected-row" } else { "" };

                        view! {
                            <tr
                                class=row_class
                                on:click=move |_| state.update(|s| s.select_active(id))
                            >
                                <td>{item.name.clone()}</td>
                                <td>{item.quantity}</td>
                                <td class="radio-cell">
                                    <input type="radio" prop:checked=is_selected />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
