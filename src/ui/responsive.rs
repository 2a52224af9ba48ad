// ============================================================================
// RESPONSIVE - debounced resize handling for elements CSS alone misses
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{on_resize, query_selector, query_selector_all, set_style, window};
use crate::utils::constants::{MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS};
use crate::utils::Debounce;

/// Applies the current layout once, then re-applies it on resize behind a
/// trailing-edge debounce so a drag-resize only does the work once.
pub fn init() -> Result<(), JsValue> {
    apply_layout();

    let debounce = Debounce::new(RESIZE_DEBOUNCE_MS, apply_layout);
    on_resize(move |_| debounce.call())?;
    Ok(())
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX)
}

fn apply_layout() {
    let mobile = viewport_width() < MOBILE_BREAKPOINT_PX;

    if let Ok(controls) = query_selector_all(".carousel-control-prev, .carousel-control-next") {
        for control in controls {
            let _ = set_style(&control, "display", if mobile { "none" } else { "" });
        }
    }

    if let Ok(Some(hero)) = query_selector(".hero-section") {
        let _ = set_style(&hero, "padding", if mobile { "2rem 0" } else { "" });
    }
}
