// ============================================================================
// CART - add-to-cart stub with header badge counter
// ============================================================================
// No cart persistence yet, only the storefront feedback: a toast plus a
// running count on the header cart button. The count lives in a data-count
// attribute so a reload starts from zero like the rest of the mock state.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{
    add_class, append_child, create_element, get_attribute, has_class, on_click, on_mouse_enter,
    on_mouse_leave, query_selector, query_selector_all, set_attribute, set_style,
    set_text_content,
};
use crate::utils::constants::NOTIFICATION_DISMISS_BRIEF_MS;
use crate::views::{notify_for, NotificationKind};

/// Registers a product in the header badge and confirms with a toast. Called
/// from the static product cards and from rendered search results.
pub fn add_to_cart(product_name: &str) {
    log::info!("🛒 [CART] Adding {}", product_name);
    if let Err(e) = bump_badge() {
        log::error!("❌ [CART] badge update failed: {:?}", e);
    }
    let _ = notify_for(
        "Product added to cart!",
        NotificationKind::Success,
        NOTIFICATION_DISMISS_BRIEF_MS,
    );
}

fn bump_badge() -> Result<(), JsValue> {
    let Some(button) = query_selector(".btn-cart")? else {
        return Ok(());
    };

    let count = get_attribute(&button, "data-count")
        .and_then(|c| c.parse::<u32>().ok())
        .unwrap_or(0)
        + 1;
    set_attribute(&button, "data-count", &count.to_string())?;

    let badge = match button.query_selector(".badge")? {
        Some(badge) => badge,
        None => {
            let badge = create_element("span")?;
            badge.set_class_name("badge");
            append_child(&button, &badge)?;
            badge
        }
    };
    set_text_content(&badge, &count.to_string());
    Ok(())
}

/// Wires the add buttons on the static product cards and the card hover
/// lift. No-op on pages without cards.
pub fn init() -> Result<(), JsValue> {
    let cards = query_selector_all(".product-card")?;
    if cards.is_empty() {
        return Ok(());
    }
    log::info!("🛒 [CART] Wiring {} product cards", cards.len());

    for card in cards {
        if let Some(button) = card.query_selector(".btn-add-cart, .add-to-cart")? {
            // Skip rendered result cards, their buttons are wired at render time.
            if has_class(&button, "wired") {
                continue;
            }
            add_class(&button, "wired")?;
            let card_for_click = card.clone();
            on_click(&button, move |e| {
                e.prevent_default();
                let name = card_for_click
                    .query_selector("h5, .product-name")
                    .ok()
                    .flatten()
                    .and_then(|el| el.text_content())
                    .unwrap_or_default();
                add_to_cart(name.trim());
            })?;
        }

        {
            let card_el = card.clone();
            on_mouse_enter(&card, move |_| {
                let _ = set_style(&card_el, "transform", "translateY(-5px)");
            })?;
        }
        {
            let card_el = card.clone();
            on_mouse_leave(&card, move |_| {
                let _ = set_style(&card_el, "transform", "translateY(0)");
            })?;
        }
    }

    Ok(())
}
