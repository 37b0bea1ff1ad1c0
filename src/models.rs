//! Donation Models
//!
//! The persisted item record and the raw form fields it is built from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item category (fixed set offered by the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Furniture,
    Clothing,
    Electronics,
    Books,
    Toys,
    Kitchenware,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Furniture,
        Category::Clothing,
        Category::Electronics,
        Category::Books,
        Category::Toys,
        Category::Kitchenware,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::Kitchenware => "Kitchenware",
            Category::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// Item condition (fixed set offered by the form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Used,
    Worn,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Used,
        Condition::Worn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Used => "Used",
            Condition::Worn => "Worn",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == s)
    }
}

/// One donation entry, as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationItem {
    /// Creation timestamp in milliseconds, bumped if needed to stay unique
    pub id: u64,
    pub item_name: String,
    pub category: Category,
    pub condition: Condition,
    pub description: String,
    pub tags: String,
    pub featured: bool,
    /// Data URL of the uploaded image
    pub image: Option<String>,
}

/// Newest-first list of donation entries
pub type ItemList = Vec<DonationItem>;

/// Value the "featured" toggle submits when checked
pub const FEATURED_SENTINEL: &str = "yes";

/// Raw form values, before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationFields {
    pub item_name: String,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub tags: String,
    pub featured: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Item name is required.")]
    MissingName,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),
    #[error("Description is required.")]
    MissingDescription,
}

impl DonationFields {
    /// Validate the fields and build a record with the given id and image
    pub fn into_item(self, id: u64, image: Option<String>) -> Result<DonationItem, FieldError> {
        if self.item_name.trim().is_empty() {
            return Err(FieldError::MissingName);
        }
        let category = Category::parse(&self.category)
            .ok_or_else(|| FieldError::UnknownCategory(self.category.clone()))?;
        let condition = Condition::parse(&self.condition)
            .ok_or_else(|| FieldError::UnknownCondition(self.condition.clone()))?;
        if self.description.trim().is_empty() {
            return Err(FieldError::MissingDescription);
        }

        Ok(DonationItem {
            id,
            featured: self.featured == FEATURED_SENTINEL,
            item_name: self.item_name,
            category,
            condition,
            description: self.description,
            tags: self.tags,
            image,
        })
    }
}

/// Next record id: the current time, or one past the newest id if the clock
/// has not moved on. `None` once the newest id is `u64::MAX`.
pub fn next_item_id(items: &[DonationItem], now_ms: u64) -> Option<u64> {
    match items.first() {
        Some(newest) if newest.id >= now_ms => newest.id.checked_add(1),
        _ => Some(now_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair_fields() -> DonationFields {
        DonationFields {
            item_name: "Chair".to_string(),
            category: "Furniture".to_string(),
            condition: "Used".to_string(),
            description: "A wooden chair".to_string(),
            tags: String::new(),
            featured: String::new(),
        }
    }

    #[test]
    fn test_build_item() {
        let item = chair_fields().into_item(42, None).unwrap();
        assert_eq!(item.id, 42);
        assert_eq!(item.item_name, "Chair");
        assert_eq!(item.category, Category::Furniture);
        assert_eq!(item.condition, Condition::Used);
        assert!(!item.featured);
        assert!(item.image.is_none());
    }

    #[test]
    fn test_featured_sentinel() {
        let mut fields = chair_fields();
        fields.featured = "yes".to_string();
        assert!(fields.into_item(1, None).unwrap().featured);

        let mut fields = chair_fields();
        fields.featured = "on".to_string();
        assert!(!fields.into_item(1, None).unwrap().featured);
    }

    #[test]
    fn test_field_validation() {
        let mut fields = chair_fields();
        fields.item_name = "   ".to_string();
        assert_eq!(fields.into_item(1, None), Err(FieldError::MissingName));

        let mut fields = chair_fields();
        fields.category = "Boats".to_string();
        assert_eq!(fields.into_item(1, None), Err(FieldError::UnknownCategory("Boats".to_string())));

        let mut fields = chair_fields();
        fields.condition = String::new();
        assert_eq!(fields.into_item(1, None), Err(FieldError::UnknownCondition(String::new())));

        let mut fields = chair_fields();
        fields.description = String::new();
        assert_eq!(fields.into_item(1, None), Err(FieldError::MissingDescription));
    }

    #[test]
    fn test_serialized_field_names() {
        let item = chair_fields().into_item(7, None).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["itemName"], "Chair");
        assert_eq!(json["category"], "Furniture");
        assert_eq!(json["condition"], "Used");
        assert!(json["image"].is_null());

        let mut fields = chair_fields();
        fields.condition = "Like New".to_string();
        let json = serde_json::to_value(fields.into_item(8, None).unwrap()).unwrap();
        assert_eq!(json["condition"], "Like New");
    }

    #[test]
    fn test_next_item_id() {
        assert_eq!(next_item_id(&[], 1_000), Some(1_000));

        let newest = chair_fields().into_item(1_000, None).unwrap();
        assert_eq!(next_item_id(&[newest.clone()], 2_000), Some(2_000));
        assert_eq!(next_item_id(&[newest.clone()], 1_000), Some(1_001));
        assert_eq!(next_item_id(&[newest], 999), Some(1_001));
    }

    #[test]
    fn test_next_item_id_at_max() {
        let newest = chair_fields().into_item(u64::MAX, None).unwrap();
        assert_eq!(next_item_id(&[newest.clone()], 1_760_000_000_000), None);
        assert_eq!(next_item_id(&[newest], u64::MAX), None);
    }
}
