//! Viewport width tracking and breakpoint policy.
//!
//! The carousel's page size and the dot policy depend on viewport width.
//! [`use_viewport_width`] subscribes to window `resize` and exposes the width
//! as a signal; the mapping functions below are pure so the breakpoint policy
//! is testable without a browser.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Small-screen breakpoint (CSS px). Below this the layout is "mobile":
/// one slide per page and one dot per car.
pub const SCREEN_SM: f64 = 640.0;

/// Width (CSS px) at which the carousel grows from two slides per page to
/// three.
pub const SCREEN_MD: f64 = 900.0;

/// Slides per page on a full-width desktop viewport.
pub const DESKTOP_SLIDES_PER_PAGE: usize = 3;

/// Mobile classification: strictly below the small-screen breakpoint.
#[must_use]
pub fn is_mobile(width: f64) -> bool {
    width < SCREEN_SM
}

/// Carousel page size for a viewport width. Thresholds are inclusive on the
/// upper side: exactly 640 shows two slides, exactly 900 shows three.
#[must_use]
pub fn slides_per_page(width: f64) -> usize {
    if width < SCREEN_SM {
        1
    } else if width < SCREEN_MD {
        2
    } else {
        DESKTOP_SLIDES_PER_PAGE
    }
}

/// Number of carousel dots: one per car on mobile, one per desktop page
/// otherwise.
#[must_use]
pub fn dot_count(item_count: usize, mobile: bool) -> usize {
    if mobile {
        item_count
    } else {
        item_count.div_ceil(DESKTOP_SLIDES_PER_PAGE)
    }
}

/// Reactive viewport width in CSS px.
///
/// Subscribes to window `resize` for the lifetime of the calling component;
/// the listener is removed in `on_cleanup`. Outside a browser the signal
/// stays at a desktop-width default.
pub fn use_viewport_width() -> ReadSignal<f64> {
    let (width, set_width) = signal(current_width());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(window) = web_sys::window() {
            let on_resize = Closure::<dyn FnMut()>::new(move || {
                let _ = set_width.try_set(current_width());
            });
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
            // Moving the closure into on_cleanup keeps it alive until the
            // component unmounts and the listener is removed.
            on_cleanup(move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_width;

    width
}

/// Current window width, or a desktop default outside the browser.
fn current_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(SCREEN_MD)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SCREEN_MD
    }
}
