//! Category Select Component
//!
//! Shared `<select>` for the fixed category set, used by both the add and
//! edit panels.

use leptos::prelude::*;

use crate::models::{Category, CATEGORY_ORDER};

#[component]
pub fn CategorySelect(
    value: Signal<Category>,
    #[prop(into)] on_change: Callback<Category>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get().as_str()
            on:change=move |ev| on_change.run(Category::from_str(&event_target_value(&ev)))
        >
            {CATEGORY_ORDER
                .iter()
                .map(|category| {
                    let category = *category;
                    view! {
                        <option value=category.as_str() selected=move || value.get() == category>
                            {category.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
