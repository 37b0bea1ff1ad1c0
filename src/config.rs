//! Board Configuration
//!
//! Fixed settings for the donation board, provided to components via context.

use leptos::prelude::*;
use log::LevelFilter;

/// Storage key the item list is written under
pub const ITEM_STORAGE_KEY: &str = "donatedItems";
/// Maximum number of stored donation items
pub const MAX_ITEMS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Local storage key for the serialized item list
    pub storage_key: &'static str,
    /// Capacity limit of the item list
    pub max_items: usize,
    /// Delay before the form is cleared after a successful submit
    pub reset_delay_ms: u32,
    /// Scroll offset past which the navbar docks
    pub navbar_dock_threshold: f64,
    /// Visible fraction that triggers a fade-in reveal
    pub reveal_threshold: f64,
    /// Image shown on cards without an uploaded image
    pub placeholder_image: &'static str,
    /// Number of description characters shown on a card
    pub description_preview_len: usize,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: ITEM_STORAGE_KEY,
            max_items: MAX_ITEMS,
            reset_delay_ms: 100,
            navbar_dock_threshold: 150.0,
            reveal_threshold: 0.1,
            placeholder_image: "placeholder.jpg",
            description_preview_len: 50,
            log_level: LevelFilter::Info,
        }
    }
}

/// Get the board config from context
pub fn use_config() -> BoardConfig {
    use_context::<BoardConfig>().unwrap_or_default()
}
