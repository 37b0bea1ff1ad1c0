//! Item Grid Component
//!
//! Card grid showing every stored donation, newest first.

use leptos::prelude::*;

use crate::config::{use_config, BoardConfig};
use crate::models::DonationItem;
use crate::store::{store_items, use_board_store};

/// Message shown instead of the grid when there are no items
pub const EMPTY_MESSAGE: &str = "No donated items are available yet.";

/// Marker appended to every description preview
const TRUNCATION_MARK: &str = "...";

/// First `max_chars` characters of the description, always followed by `...`
pub fn preview_description(description: &str, max_chars: usize) -> String {
    let mut preview: String = description.chars().take(max_chars).collect();
    preview.push_str(TRUNCATION_MARK);
    preview
}

/// Card title, e.g. `Chair (Used)`
pub fn card_heading(item: &DonationItem) -> String {
    format!("{} ({})", item.item_name, item.condition.label())
}

/// Image source for a card: the uploaded data URL or the placeholder
pub fn card_image_src<'a>(item: &'a DonationItem, placeholder: &'a str) -> &'a str {
    item.image.as_deref().unwrap_or(placeholder)
}

/// Display text and image for one card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub image_src: String,
    pub image_alt: String,
    pub heading: String,
    pub category: &'static str,
    pub description: String,
}

impl CardView {
    pub fn new(item: &DonationItem, config: &BoardConfig) -> Self {
        Self {
            image_src: card_image_src(item, config.placeholder_image).to_string(),
            image_alt: item.item_name.clone(),
            heading: card_heading(item),
            category: item.category.label(),
            description: preview_description(&item.description, config.description_preview_len),
        }
    }
}

/// What the grid shows: the empty message, or one card per item in order
#[derive(Debug, Clone, PartialEq)]
pub enum GridContents {
    Empty(&'static str),
    Cards(Vec<CardView>),
}

pub fn grid_contents(items: &[DonationItem], config: &BoardConfig) -> GridContents {
    if items.is_empty() {
        GridContents::Empty(EMPTY_MESSAGE)
    } else {
        GridContents::Cards(items.iter().map(|item| CardView::new(item, config)).collect())
    }
}

/// A single donation card
#[component]
pub fn ItemCard(card: CardView) -> impl IntoView {
    view! {
        <div class="item-card">
            <div class="item-image-wrap">
                <img src=card.image_src alt=card.image_alt class="item-image" />
            </div>
            <div class="item-info">
                <h4>{card.heading}</h4>
                <p>"Category: " <strong>{card.category}</strong></p>
                <p class="item-description">{card.description}</p>
            </div>
        </div>
    }
}

/// Full grid, re-rendered whenever the item list changes
#[component]
pub fn ItemGrid() -> impl IntoView {
    let store = use_board_store();
    let config = use_config();

    view! {
        <div id="item-list" class="item-grid">
            {move || match grid_contents(&store_items(&store), &config) {
                GridContents::Empty(message) => view! {
                    <p class="empty-list">{message}</p>
                }.into_any(),
                GridContents::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ItemCard card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Condition};

    fn chair(image: Option<&str>) -> DonationItem {
        DonationItem {
            id: 1,
            item_name: "Chair".to_string(),
            category: Category::Furniture,
            condition: Condition::Used,
            description: "A wooden chair".to_string(),
            tags: String::new(),
            featured: false,
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn test_short_description_still_marked() {
        assert_eq!(preview_description("A wooden chair", 50), "A wooden chair...");
        assert_eq!(preview_description("", 50), "...");
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "x".repeat(80);
        let preview = preview_description(&long, 50);
        assert_eq!(preview, format!("{}...", "x".repeat(50)));

        let exact = "y".repeat(50);
        assert_eq!(preview_description(&exact, 50), format!("{}...", exact));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = "椅子".repeat(30);
        let preview = preview_description(&text, 50);
        assert_eq!(preview.chars().count(), 53);
    }

    #[test]
    fn test_card_heading() {
        assert_eq!(card_heading(&chair(None)), "Chair (Used)");
    }

    #[test]
    fn test_empty_list_shows_only_message() {
        let contents = grid_contents(&[], &BoardConfig::default());
        assert_eq!(contents, GridContents::Empty(EMPTY_MESSAGE));
    }

    #[test]
    fn test_single_chair_card() {
        let contents = grid_contents(&[chair(None)], &BoardConfig::default());
        let cards = match contents {
            GridContents::Cards(cards) => cards,
            other => panic!("expected cards, got {:?}", other),
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].heading, "Chair (Used)");
        assert_eq!(cards[0].category, "Furniture");
        assert_eq!(cards[0].description, "A wooden chair...");
        assert_eq!(cards[0].image_src, "placeholder.jpg");
        assert_eq!(cards[0].image_alt, "Chair");
    }

    #[test]
    fn test_cards_keep_list_order() {
        let mut lamp = chair(Some("data:image/png;base64,AA=="));
        lamp.id = 2;
        lamp.item_name = "Lamp".to_string();
        let contents = grid_contents(&[lamp, chair(None)], &BoardConfig::default());
        let cards = match contents {
            GridContents::Cards(cards) => cards,
            other => panic!("expected cards, got {:?}", other),
        };
        let headings: Vec<_> = cards.iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, ["Lamp (Used)", "Chair (Used)"]);
        assert_eq!(cards[0].image_src, "data:image/png;base64,AA==");
    }

    #[test]
    fn test_card_image_src() {
        assert_eq!(card_image_src(&chair(None), "placeholder.jpg"), "placeholder.jpg");
        assert_eq!(
            card_image_src(&chair(Some("data:image/png;base64,AA==")), "placeholder.jpg"),
            "data:image/png;base64,AA=="
        );
    }
}
