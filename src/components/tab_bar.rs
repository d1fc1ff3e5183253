//! Tab Bar Component
//!
//! Switches between the active inventory and the deleted items views.

use leptos::prelude::*;

/// Which of the two top-level views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab {
    Inventory,
    Deleted,
}

#[component]
pub fn TabBar(
    active_tab: ReadSignal<ActiveTab>,
    set_active_tab: WriteSignal<ActiveTab>,
) -> impl IntoView {
    let tab_class = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "tab-button tab-button-active"
        } else {
            "tab-button"
        }
    };

    view! {
        <div class="tabs-row">
            <button
                class=move || tab_class(ActiveTab::Inventory)
                on:click=move |_| set_active_tab.set(ActiveTab::Inventory)
            >
                "Turimas inventorius"
            </button>
            <button
                class=move || tab_class(ActiveTab::Deleted)
                on:click=move |_| set_active_tab.set(ActiveTab::Deleted)
            >
                "Ištrinti daiktai"
            </button>
        </div>
    }
}
