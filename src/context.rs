//! Application Context
//!
//! The shared state manager, provided via the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpInventoryApi;
use crate::manager::InventoryStateManager;

/// The manager type the app runs against
pub type AppManager = InventoryStateManager<HttpInventoryApi>;

pub fn provide_manager(manager: AppManager) {
    provide_context(manager);
}

/// Get the shared state manager from context
pub fn use_manager() -> AppManager {
    expect_context::<AppManager>()
}
