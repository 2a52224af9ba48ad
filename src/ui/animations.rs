// ============================================================================
// ANIMATIONS - scroll-triggered fade-in via IntersectionObserver
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{add_class, query_selector_all};

const ANIMATED_SELECTOR: &str =
    ".product-card, .action-btn, .hero-content, .auth-form-content > *";

/// Tags the animatable elements with `fade-in` and reveals each one with
/// `visible` once it scrolls into view. The bottom margin makes elements
/// appear slightly before they reach the viewport edge.
pub fn init() -> Result<(), JsValue> {
    let elements = query_selector_all(ANIMATED_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = add_class(&target, "visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        add_class(element, "fade-in")?;
        observer.observe(element);
    }
    log::info!("✨ [ANIMATIONS] Observing {} elements", elements.len());

    Ok(())
}
