// ============================================================================
// RESULTS VIEW - DOM projection of a catalog query
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::dom::{append_child, on_click, set_inner_html, set_style, ElementBuilder};
use crate::models::ProductRecord;
use crate::ui::cart;

fn product_icon(category: &str) -> &'static str {
    match category {
        "Pain Relief" => "💊",
        "Vitamins" => "🧴",
        "Supplements" => "🌿",
        "Antibiotics" => "💉",
        _ => "📦",
    }
}

/// Clears the container and renders one card per record, or the empty-state
/// block; then unhides the region and smooth-scrolls to it.
pub fn render_results(container: &Element, products: &[ProductRecord]) -> Result<(), JsValue> {
    set_inner_html(container, "");

    if products.is_empty() {
        let empty = ElementBuilder::new("div")?.class("no-results").build();
        let heading = ElementBuilder::new("h5")?.text("No Products Found").build();
        let hint = ElementBuilder::new("p")?
            .text("Try adjusting your search criteria or browse our categories.")
            .build();
        append_child(&empty, &heading)?;
        append_child(&empty, &hint)?;
        append_child(container, &empty)?;
    } else {
        let heading = ElementBuilder::new("h5")?
            .text(&format!("Search Results ({} found)", products.len()))
            .build();
        let grid = ElementBuilder::new("div")?.class("results-grid").build();

        for product in products {
            append_child(&grid, &render_card(product)?)?;
        }

        append_child(container, &heading)?;
        append_child(container, &grid)?;
    }

    set_style(container, "display", "block")?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    container.scroll_into_view_with_scroll_into_view_options(&options);

    Ok(())
}

fn render_card(product: &ProductRecord) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("result-item").build();

    let image = ElementBuilder::new("div")?
        .class("result-image")
        .text(product_icon(product.category))
        .build();

    let info = ElementBuilder::new("div")?.class("result-info").build();
    let name = ElementBuilder::new("h6")?.text(product.name).build();
    let price = ElementBuilder::new("p")?
        .class("price")
        .text(&format!("${:.2}", product.price))
        .build();
    let category = ElementBuilder::new("small")?
        .class("category")
        .text(product.category)
        .build();
    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-sm btn-primary")
        .text("Add to Cart")
        .build();

    {
        let product_name = product.name;
        on_click(&add_btn, move |_| cart::add_to_cart(product_name))?;
    }

    append_child(&info, &name)?;
    append_child(&info, &price)?;
    append_child(&info, &category)?;
    append_child(&info, &add_btn)?;
    append_child(&card, &image)?;
    append_child(&card, &info)?;

    Ok(card)
}
