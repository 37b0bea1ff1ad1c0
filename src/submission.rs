//! Donation Submission
//!
//! One submit cycle against the store: capacity check, image readiness
//! check, record build, prepend, persist. The form component handles the
//! browser side (preventing navigation, dialog, reset, re-render).

use thiserror::Error;

use crate::capture::{ImageNotReady, ImageSlot};
use crate::models::{next_item_id, DonationFields, FieldError, ItemList};
use crate::storage::{ItemStore, KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("The donation limit has been reached ({max} items). No more items can be added.")]
    CapacityReached { max: usize },

    #[error("Please wait for the image to finish loading before submitting.")]
    ImageNotReady,

    #[error("No new item id is available; the stored list has reached the largest id.")]
    IdsExhausted,

    #[error("{0}")]
    InvalidField(#[from] FieldError),

    #[error("The donation could not be saved: {0}")]
    Store(#[from] StoreError),
}

impl From<ImageNotReady> for SubmitError {
    fn from(_: ImageNotReady) -> Self {
        SubmitError::ImageNotReady
    }
}

/// Build a record from `fields` and `image`, prepend it to the stored list
/// and persist. Returns the updated list. On error nothing is written.
pub fn submit<S: KeyValueStore>(
    store: &ItemStore<S>,
    max_items: usize,
    fields: DonationFields,
    image: &ImageSlot,
    now_ms: u64,
) -> Result<ItemList, SubmitError> {
    let mut items = store.load();

    if items.len() >= max_items {
        return Err(SubmitError::CapacityReached { max: max_items });
    }

    let image = image.readiness()?;

    let id = next_item_id(&items, now_ms).ok_or(SubmitError::IdsExhausted)?;
    let item = fields.into_item(id, image)?;
    log::info!("Adding donation #{} '{}'", item.id, item.item_name);

    items.insert(0, item);
    store.save(&items)?;
    Ok(items)
}
