//! Inventorius App
//!
//! Root component: builds the HTTP client and the state manager, provides
//! them via context, and switches between the inventory and deleted tabs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpInventoryApi;
use crate::components::{ActiveTab, DeletedPanel, InventoryView, NoticeBanner, TabBar};
use crate::context::provide_manager;
use crate::manager::InventoryStateManager;

/// Base address of the remote inventory service
pub const API_BASE_URL: &str = "http://localhost:4000";

#[component]
pub fn App() -> impl IntoView {
    let manager = InventoryStateManager::new(HttpInventoryApi::new(API_BASE_URL));
    provide_manager(manager.clone());
    let state = manager.state();

    let (active_tab, set_active_tab) = signal(ActiveTab::Inventory);

    // Load both lists on mount; this is the one intentionally concurrent pair
    {
        let manager = manager.clone();
        Effect::new(move |_| {
            let manager = manager.clone();
            spawn_local(async move {
                manager.initialize().await;
            });
        });
    }

    view! {
        <div class="inventorius-page">
            <div class="inventorius-card">
                <div class="header-row">
                    <h1 class="page-title">"InfoSA Inventorius"</h1>
                    <TabBar active_tab=active_tab set_active_tab=set_active_tab />
                </div>

                <NoticeBanner />

                {move || {
                    if !state.with(|s| s.ready) {
                        return view! { <p>"Kraunami daiktai..."</p> }.into_any();
                    }
                    match active_tab.get() {
                        ActiveTab::Inventory => view! { <InventoryView /> }.into_any(),
                        ActiveTab::Deleted => view! { <DeletedPanel /> }.into_any(),
                    }
                }}
            </div>
        </div>
    }
}
