// ============================================================================
// FORMS - validation, presentation and the per-form controllers
// ============================================================================

pub mod login;
pub mod password_toggle;
pub mod presenter;
pub mod profile;
pub mod register;
pub mod validators;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, on_blur, on_input, query_selector_all};
use crate::forms::validators::FieldValidationResult;
use wasm_bindgen::JsCast;

/// Marks every form for manual validation: the browser's native bubbles are
/// suppressed so the inline presenter is the single source of feedback.
pub fn scaffold_validation() -> Result<(), JsValue> {
    for form in query_selector_all("form")? {
        add_class(&form, "needs-validation")?;
        if let Some(form) = form.dyn_ref::<web_sys::HtmlFormElement>() {
            form.set_no_validate(true);
        }
    }
    Ok(())
}

/// Real-time wiring for one field: blur validates it, input only clears its
/// error state (no re-validation until the next blur or submit).
pub fn wire_live_validation<V>(input: &Element, validate: V) -> Result<(), JsValue>
where
    V: Fn(&Element) -> FieldValidationResult + 'static,
{
    {
        let field = input.clone();
        on_blur(input, move |_| {
            let result = validate(&field);
            if let Err(e) = presenter::present(&field, &result) {
                log::error!("❌ [FORMS] presenter failed: {:?}", e);
            }
        })?;
    }
    {
        let field = input.clone();
        on_input(input, move |_| {
            if let Err(e) = presenter::clear_validation(&field) {
                log::error!("❌ [FORMS] clear failed: {:?}", e);
            }
        })?;
    }
    Ok(())
}

/// Current string value of a field element, empty when it is not an input.
pub(crate) fn element_value(element: &Element) -> String {
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|i| i.value())
        .unwrap_or_default()
}

pub(crate) fn element_checked(element: &Element) -> bool {
    element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|i| i.checked())
        .unwrap_or(false)
}
