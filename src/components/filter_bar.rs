//! Filter Bar Component
//!
//! Category buttons with an exclusive active state. Selecting one does not
//! change the item list.

use leptos::prelude::*;

use crate::models::Category;

const ALL_LABEL: &str = "All";

/// Button labels in display order
pub fn filter_labels() -> Vec<&'static str> {
    std::iter::once(ALL_LABEL)
        .chain(Category::ALL.iter().map(|c| c.label()))
        .collect()
}

/// Class for the button at `index`; only the active one gets `active`
pub fn button_class(active: usize, index: usize) -> &'static str {
    if active == index { "active" } else { "" }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let (active, set_active) = signal(0usize);

    view! {
        <div class="filters">
            {filter_labels().into_iter().enumerate().map(|(index, label)| {
                view! {
                    <button
                        type="button"
                        class=move || button_class(active.get(), index)
                        on:click=move |_| set_active.set(index)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
