//! UI Components
//!
//! Leptos components making up the donation board page.

mod navbar;
mod donation_form;
mod filter_bar;
mod item_grid;
mod success_modal;

pub use navbar::Navbar;
pub use donation_form::DonationForm;
pub use filter_bar::FilterBar;
pub use item_grid::ItemGrid;
pub use success_modal::{DialogVisibility, SuccessModal};
