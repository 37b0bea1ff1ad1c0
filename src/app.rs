//! Donation Board App
//!
//! Page layout and one-time initialization.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DialogVisibility, DonationForm, FilterBar, ItemGrid, Navbar, SuccessModal};
use crate::config::BoardConfig;
use crate::storage::ItemStore;
use crate::store::{store_set_items, BoardState};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(BoardState::default());
    let (docked, set_docked) = signal(false);
    let dialog = RwSignal::new(DialogVisibility::Hidden);

    // Provide context to all children
    provide_context(store);
    provide_context(config.clone());

    // Initial render from storage
    let items = ItemStore::local(config.storage_key).load();
    log::info!("Loaded {} stored items", items.len());
    store_set_items(&store, items);

    // Page effects, bound once after mount
    let dock_threshold = config.navbar_dock_threshold;
    let reveal_threshold = config.reveal_threshold;
    Effect::new(move |_| {
        leptos_scroll_effects::bind_sticky_navbar(dock_threshold, set_docked);
        leptos_scroll_effects::observe_fade_ins(reveal_threshold);
    });

    view! {
        <Navbar docked=docked />

        <main class="main-content">
            <section id="donate" class="fade-in">
                <h2>"Donate an item"</h2>
                <DonationForm on_saved=move |_| dialog.update(|v| v.show()) />
            </section>

            <section id="items" class="fade-in">
                <h2>"Available donations"</h2>
                <FilterBar />
                <ItemGrid />
            </section>
        </main>

        <SuccessModal visibility=dialog />
    }
}
