// ============================================================================
// FIELD-STATE PRESENTER - projects a validation result onto one input
// ============================================================================
// Exactly one of is-valid/is-invalid at a time, and at most one inline
// feedback node per field. Side effects only.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{
    add_class, append_child, get_attribute, remove_class, set_attribute, ElementBuilder,
};
use crate::forms::validators::FieldValidationResult;

pub fn present(input: &Element, result: &FieldValidationResult) -> Result<(), JsValue> {
    if result.valid {
        set_field_valid(input)
    } else {
        set_field_error(input, result.message.unwrap_or("Invalid value"))
    }
}

pub fn set_field_error(input: &Element, message: &str) -> Result<(), JsValue> {
    remove_class(input, "is-valid")?;
    add_class(input, "is-invalid")?;

    remove_feedback(input);
    if let Some(parent) = input.parent_element() {
        let feedback = ElementBuilder::new("div")?
            .class("invalid-feedback d-block")
            .text(message)
            .build();
        append_child(&parent, &feedback)?;
    }
    Ok(())
}

pub fn set_field_valid(input: &Element) -> Result<(), JsValue> {
    remove_class(input, "is-invalid")?;
    add_class(input, "is-valid")?;
    remove_feedback(input);
    Ok(())
}

/// Reset to the neutral state; runs on every keystroke.
pub fn clear_validation(input: &Element) -> Result<(), JsValue> {
    remove_class(input, "is-valid")?;
    remove_class(input, "is-invalid")?;
    remove_feedback(input);
    Ok(())
}

fn remove_feedback(input: &Element) {
    if let Some(parent) = input.parent_element() {
        if let Ok(Some(existing)) = parent.query_selector(".invalid-feedback") {
            existing.remove();
        }
    }
}

/// Submit-button busy state: disabled, "loading" class, label swapped for a
/// wait message and restored from a data attribute afterwards.
pub fn set_loading_state(button: &Element, loading: bool) -> Result<(), JsValue> {
    if loading {
        add_class(button, "loading")?;
        set_attribute(button, "disabled", "disabled")?;
        let original = button.text_content().unwrap_or_default();
        set_attribute(button, "data-original-text", original.trim())?;
        button.set_text_content(Some("Please wait..."));
    } else {
        remove_class(button, "loading")?;
        button.remove_attribute("disabled")?;
        if let Some(original) = get_attribute(button, "data-original-text") {
            button.set_text_content(Some(&original));
        }
    }
    Ok(())
}
