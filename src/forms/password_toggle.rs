// ============================================================================
// PASSWORD TOGGLE - show/hide control attached to every password input
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{
    create_element, get_attribute, on_click, query_selector_all, set_attribute, set_inner_html,
};

/// Wraps each `input[type="password"]` in a relative container and appends a
/// visibility toggle button. Runs on every page; does nothing when there are
/// no password inputs.
pub fn init() -> Result<(), JsValue> {
    for input in query_selector_all("input[type='password']")? {
        let Some(parent) = input.parent_element() else {
            continue;
        };

        let wrapper = create_element("div")?;
        wrapper.set_class_name("position-relative");
        parent.insert_before(&wrapper, Some(&input))?;
        wrapper.append_child(&input)?;

        let toggle = create_element("button")?;
        set_attribute(&toggle, "type", "button")?;
        toggle.set_class_name("btn btn-link password-toggle position-absolute end-0 top-50 translate-middle-y");
        set_attribute(&toggle, "aria-label", "Toggle password visibility")?;
        set_inner_html(&toggle, "<i class=\"bi bi-eye\"></i>");
        wrapper.append_child(&toggle)?;

        {
            let input = input.clone();
            let toggle_el = toggle.clone();
            on_click(&toggle, move |_| {
                let hidden = get_attribute(&input, "type").as_deref() == Some("password");
                let new_type = if hidden { "text" } else { "password" };
                if let Err(e) = set_attribute(&input, "type", new_type) {
                    log::error!("❌ [TOGGLE] {:?}", e);
                    return;
                }
                let icon = if hidden {
                    "<i class=\"bi bi-eye-slash\"></i>"
                } else {
                    "<i class=\"bi bi-eye\"></i>"
                };
                set_inner_html(&toggle_el, icon);
            })?;
        }
    }

    Ok(())
}
