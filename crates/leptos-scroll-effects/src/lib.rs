//! Leptos Scroll Effects
//!
//! Page-level presentation effects bound once at startup:
//! navbar docking past a scroll threshold, and one-shot fade-in reveal
//! for elements entering the viewport.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Class marking elements that fade in when first scrolled into view
pub const FADE_IN_CLASS: &str = "fade-in";
/// Class applied before an element has been revealed
pub const HIDDEN_CLASS: &str = "invisible";
/// Class applied once an element has been revealed
pub const REVEALED_CLASS: &str = "visible";

/// Whether the navbar should be docked at this vertical scroll offset
pub fn is_docked(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Bind a global scroll listener that keeps `docked` in sync with the
/// window's scroll offset.
pub fn bind_sticky_navbar(threshold: f64, docked: WriteSignal<bool>) {
    let Some(win) = web_sys::window() else {
        return;
    };

    let scroll_win = win.clone();
    let mut last = None;
    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let y = scroll_win.scroll_y().unwrap_or(0.0);
        let next = is_docked(y, threshold);
        // Only notify subscribers on an actual change
        if last != Some(next) {
            last = Some(next);
            docked.set(next);
        }
    });

    let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// Observe every element carrying [`FADE_IN_CLASS`] and reveal it the first
/// time at least `threshold` of it is visible. Revealed elements are
/// unobserved.
pub fn observe_fade_ins(threshold: f64) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_root_margin("0px");
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

    let observer = match web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    on_intersect.forget();

    let Ok(nodes) = doc.query_selector_all(&format!(".{}", FADE_IN_CLASS)) else {
        return;
    };
    let mut count = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let _ = el.class_list().add_1(HIDDEN_CLASS);
        observer.observe(&el);
        count += 1;
    }
    log::debug!("Observing {} fade-in elements", count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docked_is_strictly_past_threshold() {
        assert!(!is_docked(0.0, 150.0));
        assert!(!is_docked(150.0, 150.0));
        assert!(is_docked(150.5, 150.0));
        assert!(is_docked(900.0, 150.0));
    }
}
