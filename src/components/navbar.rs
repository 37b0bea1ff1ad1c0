//! Navbar Component
//!
//! Top navigation that docks once the page has scrolled far enough.

use leptos::prelude::*;

#[component]
pub fn Navbar(docked: ReadSignal<bool>) -> impl IntoView {
    view! {
        <nav class=move || if docked.get() { "navbar sticky" } else { "navbar" }>
            <a class="brand" href="#">"Donation Board"</a>
            <ul class="nav-links">
                <li><a href="#donate">"Donate"</a></li>
                <li><a href="#items">"Items"</a></li>
            </ul>
        </nav>
    }
}
