//! Donation Form Component
//!
//! Collects a donation, reads the optional image, and runs the submit cycle.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::capture::{read_as_data_url, validate_media_type, PendingImage};
use crate::config::use_config;
use crate::models::{Category, Condition, DonationFields, FEATURED_SENTINEL};
use crate::storage::ItemStore;
use crate::store::{
    store_clear_image, store_image, store_image_untracked, store_resolve_image, store_select_image,
    store_set_items, use_board_store,
};
use crate::submission::submit;

/// Show a blocking notice
fn notify(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Preview area under the file input
#[component]
fn ImagePreview() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div id="imagePreview" class="image-preview">
            {move || match store_image(&store).state().clone() {
                PendingImage::Ready(data_url) => view! {
                    <img src=data_url alt="Item Preview" class="preview-image" />
                }.into_any(),
                PendingImage::Rejected(e) => view! {
                    <p class="error-text">{e.to_string()}</p>
                }.into_any(),
                PendingImage::Empty | PendingImage::Loading => ().into_any(),
            }}
        </div>
    }
}

/// Donation entry form
#[component]
pub fn DonationForm(#[prop(into)] on_saved: Callback<()>) -> impl IntoView {
    let store = use_board_store();
    let config = use_config();

    let (item_name, set_item_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (condition, set_condition) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (tags, set_tags) = signal(String::new());
    let (featured, set_featured) = signal(false);
    let file_input = NodeRef::<html::Input>::new();

    let reset_form = move || {
        set_item_name.set(String::new());
        set_category.set(String::new());
        set_condition.set(String::new());
        set_description.set(String::new());
        set_tags.set(String::new());
        set_featured.set(false);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        store_clear_image(&store);
    };

    let on_image_change = move |_ev: web_sys::Event| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            store_clear_image(&store);
            return;
        };

        let generation = store_select_image(&store);
        if let Err(e) = validate_media_type(&file.type_()) {
            log::warn!("Rejected image '{}': {:?}", file.name(), e);
            store_resolve_image(&store, generation, Err(e));
            return;
        }

        spawn_local(async move {
            let outcome = read_as_data_url(&file).await;
            if let Err(e) = &outcome {
                log::error!("Reading image '{}' failed: {:?}", file.name(), e);
            }
            if !store_resolve_image(&store, generation, outcome) {
                log::debug!("Discarded read of '{}' superseded by a newer selection", file.name());
            }
        });
    };

    let storage_key = config.storage_key;
    let max_items = config.max_items;
    let reset_delay_ms = config.reset_delay_ms;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let fields = DonationFields {
            item_name: item_name.get_untracked(),
            category: category.get_untracked(),
            condition: condition.get_untracked(),
            description: description.get_untracked(),
            tags: tags.get_untracked(),
            featured: if featured.get_untracked() { FEATURED_SENTINEL.to_string() } else { String::new() },
        };
        let image = store_image_untracked(&store);
        let item_store = ItemStore::local(storage_key);

        match submit(&item_store, max_items, fields, &image, js_sys::Date::now() as u64) {
            Ok(items) => {
                on_saved.run(());
                // Reset after the dialog has opened
                spawn_local(async move {
                    TimeoutFuture::new(reset_delay_ms).await;
                    reset_form();
                });
                store_set_items(&store, items);
            }
            Err(e) => {
                log::warn!("Submission refused: {}", e);
                notify(&e.to_string());
            }
        }
    };

    view! {
        <form id="donation-form" class="donation-form" on:submit=on_submit>
            <label>
                "Item name"
                <input
                    type="text"
                    name="itemName"
                    required=true
                    prop:value=move || item_name.get()
                    on:input=move |ev| set_item_name.set(event_target_value(&ev))
                />
            </label>

            <label>
                "Category"
                <select
                    name="category"
                    required=true
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    <option value="">"Select a category"</option>
                    {Category::ALL.iter().map(|c| view! {
                        <option value=c.label()>{c.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label>
                "Condition"
                <select
                    name="condition"
                    required=true
                    prop:value=move || condition.get()
                    on:change=move |ev| set_condition.set(event_target_value(&ev))
                >
                    <option value="">"Select a condition"</option>
                    {Condition::ALL.iter().map(|c| view! {
                        <option value=c.label()>{c.label()}</option>
                    }).collect_view()}
                </select>
            </label>

            <label>
                "Description"
                <textarea
                    name="description"
                    required=true
                    prop:value=move || description.get()
                    on:input=move |ev| {
                        let target = ev.target();
                        if let Some(textarea) = target.as_ref().and_then(|t| t.dyn_ref::<web_sys::HtmlTextAreaElement>()) {
                            set_description.set(textarea.value());
                        }
                    }
                ></textarea>
            </label>

            <label>
                "Tags"
                <input
                    type="text"
                    name="tags"
                    placeholder="e.g. wood, vintage"
                    prop:value=move || tags.get()
                    on:input=move |ev| set_tags.set(event_target_value(&ev))
                />
            </label>

            <label class="featured-toggle">
                <input
                    type="checkbox"
                    name="featured"
                    value=FEATURED_SENTINEL
                    prop:checked=move || featured.get()
                    on:change=move |ev| set_featured.set(event_target_checked(&ev))
                />
                "Feature this item"
            </label>

            <label>
                "Photo"
                <input
                    type="file"
                    id="itemImage"
                    name="itemImage"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_image_change
                />
            </label>
            <ImagePreview />

            <button type="submit">"Donate"</button>
        </form>
    }
}
