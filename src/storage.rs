//! Persistent Item Store
//!
//! The whole item list lives as one JSON value under a single key in the
//! browser's local storage. Every mutation rewrites the full list.

use thiserror::Error;

use crate::models::{DonationItem, ItemList};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read from storage: {0}")]
    Read(String),

    #[error("failed to write to storage: {0}")]
    Write(String),

    #[error("stored item list could not be decoded: {0}")]
    Decode(serde_json::Error),

    #[error("item list could not be encoded: {0}")]
    Encode(serde_json::Error),
}

/// String key-value storage backend
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}

pub fn encode_items(items: &[DonationItem]) -> Result<String, StoreError> {
    serde_json::to_string(items).map_err(StoreError::Encode)
}

pub fn decode_items(raw: &str) -> Result<ItemList, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::Decode)
}

/// Item list persisted under a fixed key
#[derive(Debug, Clone)]
pub struct ItemStore<S> {
    backend: S,
    key: String,
}

impl ItemStore<LocalStorage> {
    pub fn local(key: &str) -> Self {
        Self::new(LocalStorage, key)
    }
}

impl<S: KeyValueStore> ItemStore<S> {
    pub fn new(backend: S, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    /// Load the list. A missing value is an empty list; an undecodable one
    /// is an error.
    pub fn try_load(&self) -> Result<ItemList, StoreError> {
        match self.backend.get(&self.key)? {
            Some(raw) => decode_items(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Load the list, treating any failure as an empty list
    pub fn load(&self) -> ItemList {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Ignoring stored items under '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Overwrite the stored list
    pub fn save(&self, items: &[DonationItem]) -> Result<(), StoreError> {
        let raw = encode_items(items)?;
        self.backend.set(&self.key, &raw)?;
        log::debug!("Saved {} items ({} bytes)", items.len(), raw.len());
        Ok(())
    }
}

/// In-memory backend for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Condition};
    use proptest::prelude::*;

    const KEY: &str = "donatedItems";

    fn make_item(id: u64, name: &str) -> DonationItem {
        DonationItem {
            id,
            item_name: name.to_string(),
            category: Category::Books,
            condition: Condition::LikeNew,
            description: format!("{} description", name),
            tags: "kids,reading".to_string(),
            featured: id % 2 == 0,
            image: None,
        }
    }

    #[test]
    fn test_missing_key_is_empty() {
        let store = ItemStore::new(MemoryStorage::default(), KEY);
        assert!(store.try_load().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = ItemStore::new(MemoryStorage::default(), KEY);
        let items = vec![make_item(2, "Lamp"), make_item(1, "Desk")];
        store.save(&items).unwrap();
        assert_eq!(store.load(), items);

        let raw = store.backend().raw(KEY).unwrap();
        assert!(raw.starts_with(r#"[{"id":2,"itemName":"Lamp","category":"Books","condition":"Like New""#));
        assert_eq!(decode_items(&raw).unwrap(), items);
    }

    #[test]
    fn test_save_overwrites() {
        let store = ItemStore::new(MemoryStorage::default(), KEY);
        store.save(&[make_item(1, "Desk")]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_decode_failure_is_distinguishable() {
        let store = ItemStore::new(MemoryStorage::with_value(KEY, "{not json"), KEY);
        assert!(matches!(store.try_load(), Err(StoreError::Decode(_))));
        // Degrades to empty
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_reads_legacy_layout() {
        let raw = r#"[{"id":1700000000000,"itemName":"Chair","category":"Furniture","condition":"Used","description":"A wooden chair","tags":"","featured":false,"image":null}]"#;
        let store = ItemStore::new(MemoryStorage::with_value(KEY, raw), KEY);
        let items = store.try_load().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1_700_000_000_000);
        assert_eq!(items[0].category, Category::Furniture);
        assert_eq!(items[0].condition, Condition::Used);
        assert_eq!(encode_items(&items).unwrap(), raw);
    }

    fn arb_item() -> impl Strategy<Value = DonationItem> {
        (
            any::<u64>(),
            ".{0,40}",
            prop::sample::select(Category::ALL.to_vec()),
            prop::sample::select(Condition::ALL.to_vec()),
            ".{0,120}",
            ".{0,20}",
            any::<bool>(),
            prop::option::of("data:image/png;base64,[A-Za-z0-9+/]{0,64}"),
        )
            .prop_map(|(id, item_name, category, condition, description, tags, featured, image)| {
                DonationItem {
                    id,
                    item_name,
                    category,
                    condition,
                    description,
                    tags,
                    featured,
                    image,
                }
            })
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(items in prop::collection::vec(arb_item(), 0..8)) {
            let raw = encode_items(&items).unwrap();
            prop_assert_eq!(decode_items(&raw).unwrap(), items);
        }
    }
}
