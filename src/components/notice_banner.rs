//! Notice Banner Component
//!
//! Renders the action-specific failure notice from state, if any.

use leptos::prelude::*;

use crate::context::use_manager;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_manager().state();

    view! {
        {move || {
            state
                .with(|s| s.notice.clone())
                .map(|notice| view! { <p class="error-text">{notice.text}</p> })
        }}
    }
}
