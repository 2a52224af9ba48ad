// ============================================================================
// ACCESSIBILITY - aria labels and keyboard navigation
// ============================================================================
// Document-level listeners here register exactly once, at boot.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::dom::{
    document, get_attribute, on_keydown, query_selector_all, query_selector_all_in,
    remove_class, set_attribute,
};

pub fn init() -> Result<(), JsValue> {
    label_unlabeled_inputs()?;

    let Some(doc) = document() else {
        return Ok(());
    };
    on_keydown(doc.as_ref(), move |e: web_sys::KeyboardEvent| {
        match e.key().as_str() {
            "Enter" => handle_enter(&e),
            "Escape" => close_open_dropdowns(),
            _ => {}
        }
    })?;

    Ok(())
}

/// Inputs without an aria-label borrow their placeholder, falling back to the
/// name attribute.
fn label_unlabeled_inputs() -> Result<(), JsValue> {
    for input in query_selector_all("input:not([aria-label]), select:not([aria-label])")? {
        let label = get_attribute(&input, "placeholder")
            .or_else(|| get_attribute(&input, "name"))
            .unwrap_or_default();
        if !label.is_empty() {
            set_attribute(&input, "aria-label", &label)?;
        }
    }
    Ok(())
}

/// Enter inside a text input moves focus to the next field, or submits when
/// it was the last one. Submit buttons keep their native behaviour.
fn handle_enter(e: &web_sys::KeyboardEvent) {
    let Some(input) = e
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    let input_type = input.type_();
    if input_type == "submit" || input_type == "button" || input_type == "checkbox" {
        return;
    }
    let Ok(Some(form)) = input.closest("form") else {
        return;
    };

    e.prevent_default();

    let fields = match query_selector_all_in(&form, "input:not([type='checkbox']), select") {
        Ok(fields) => fields,
        Err(_) => return,
    };
    let input_el: &Element = input.as_ref();
    let position = fields.iter().position(|f| f == input_el);

    match position.and_then(|i| fields.get(i + 1)) {
        Some(next) => {
            if let Some(next) = next.dyn_ref::<HtmlElement>() {
                let _ = next.focus();
            }
        }
        None => {
            if let Ok(Some(submit)) = form.query_selector("button[type='submit']") {
                if let Some(submit) = submit.dyn_ref::<HtmlElement>() {
                    submit.click();
                }
            }
        }
    }
}

fn close_open_dropdowns() {
    if let Ok(menus) = query_selector_all(".dropdown-menu.show") {
        for menu in menus {
            let _ = remove_class(&menu, "show");
        }
    }
}
