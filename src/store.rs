//! Board State Store
//!
//! Single reactive state object for the page, using Leptos reactive_stores
//! for field-level reactivity. Handlers reach it through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::capture::{CaptureError, ImageSlot};
use crate::models::ItemList;

/// Page state shared by the form and the item grid
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Items as last loaded or saved, newest first
    pub items: ItemList,
    /// Image field of the donation form
    pub image: ImageSlot,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed item list
pub fn store_set_items(store: &BoardStore, items: ItemList) {
    store.items().set(items);
}

/// Reactive read of the item list
pub fn store_items(store: &BoardStore) -> ItemList {
    store.items().get()
}

/// Current image slot, without subscribing
pub fn store_image_untracked(store: &BoardStore) -> ImageSlot {
    store.image().get_untracked()
}

/// Reactive read of the image slot
pub fn store_image(store: &BoardStore) -> ImageSlot {
    store.image().get()
}

/// Begin a new image selection, returning its generation
pub fn store_select_image(store: &BoardStore) -> u32 {
    let mut generation = 0;
    store.image().update(|slot| generation = slot.select());
    generation
}

/// Apply a read/validation outcome to the image slot
pub fn store_resolve_image(store: &BoardStore, generation: u32, outcome: Result<String, CaptureError>) -> bool {
    let mut applied = false;
    store.image().update(|slot| applied = slot.resolve(generation, outcome));
    applied
}

/// Clear the image slot
pub fn store_clear_image(store: &BoardStore) {
    store.image().update(|slot| slot.clear());
}
