//! Success Modal Component
//!
//! Confirmation dialog opened after a donation is saved.

use leptos::html;
use leptos::prelude::*;

/// Dialog visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVisibility {
    #[default]
    Hidden,
    Visible,
}

/// What the user activated while the dialog was open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    BackButton,
    /// The dimmed area around the dialog box
    Backdrop,
    /// Anything inside the dialog box
    Content,
}

impl DialogVisibility {
    pub fn show(&mut self) {
        *self = DialogVisibility::Visible;
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) {
        if trigger != DismissTrigger::Content {
            *self = DialogVisibility::Hidden;
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == DialogVisibility::Visible
    }
}

/// Modal shown on successful submission
#[component]
pub fn SuccessModal(visibility: RwSignal<DialogVisibility>) -> impl IntoView {
    let backdrop = NodeRef::<html::Div>::new();

    let dismiss = move |trigger: DismissTrigger| visibility.update(|v| v.dismiss(trigger));

    // Only a click whose target is the backdrop itself closes the dialog
    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let on_backdrop = match (ev.target(), backdrop.get_untracked()) {
            (Some(target), Some(el)) => {
                let el: &web_sys::EventTarget = el.as_ref();
                &target == el
            }
            _ => false,
        };
        dismiss(if on_backdrop { DismissTrigger::Backdrop } else { DismissTrigger::Content });
    };

    view! {
        <div
            id="success-modal"
            class="modal"
            node_ref=backdrop
            style:display=move || if visibility.get().is_visible() { "flex" } else { "none" }
            on:click=on_backdrop_click
        >
            <div class="modal-content">
                <button id="modalClose" class="close-btn" on:click=move |_| dismiss(DismissTrigger::CloseButton)>
                    "×"
                </button>
                <h3>"Thank you!"</h3>
                <p>"Your donation has been listed."</p>
                <div class="modal-actions">
                    <button id="modalBack" type="button" on:click=move |_| dismiss(DismissTrigger::BackButton)>
                        "Back"
                    </button>
                    <a id="modalGoto" href="#item-list" on:click=move |_| dismiss(DismissTrigger::BackButton)>
                        "View items"
                    </a>
                </div>
            </div>
        </div>
    }
}
