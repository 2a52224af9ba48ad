// ============================================================================
// PROFILE FORM CONTROLLER - edit/view toggle + simulated save
// ============================================================================
// The email field stays read-only in every mode. Saving re-renders the
// header name instead of redirecting.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    add_class, document, get_element_by_id, input_checked, input_value, on_click, on_submit,
    query_selector, query_selector_all_in, remove_attribute, remove_class, set_attribute,
    set_inner_html, set_style, set_text_content,
};
use crate::forms::validators::{
    validate_date_of_birth, validate_name, validate_phone, FieldValidationResult,
};
use crate::forms::{element_value, presenter, wire_live_validation};
use crate::services::AuthService;
use crate::state::FormState;
use crate::views::{notify, NotificationKind};

#[derive(Debug, Clone, Default)]
pub struct ProfileSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub date_of_birth: String,
    pub newsletter: bool,
}

impl ProfileSnapshot {
    fn collect() -> Self {
        Self {
            first_name: input_value("firstName"),
            last_name: input_value("lastName"),
            phone: input_value("phone"),
            date_of_birth: input_value("dateOfBirth"),
            newsletter: input_checked("newsletter"),
        }
    }
}

/// Names are required; phone and date of birth are optional but validated
/// when present.
pub fn validate_profile(s: &ProfileSnapshot) -> Vec<(&'static str, FieldValidationResult)> {
    let phone = if s.phone.trim().is_empty() {
        FieldValidationResult::ok()
    } else {
        validate_phone(&s.phone)
    };
    vec![
        ("firstName", validate_name(&s.first_name)),
        ("lastName", validate_name(&s.last_name)),
        ("phone", phone),
        ("dateOfBirth", validate_date_of_birth(&s.date_of_birth)),
    ]
}

/// No-op when the page has no `#profileForm`.
pub fn init() -> Result<(), JsValue> {
    let Some(form) = get_element_by_id("profileForm") else {
        return Ok(());
    };
    log::info!("👤 [PROFILE] Wiring profile form");

    let state = FormState::new();
    let editing = Rc::new(RefCell::new(false));

    for id in ["firstName", "lastName"] {
        if let Some(el) = get_element_by_id(id) {
            wire_live_validation(&el, |el| validate_name(&element_value(el)))?;
        }
    }
    if let Some(el) = get_element_by_id("phone") {
        wire_live_validation(&el, |el| {
            let value = element_value(el);
            if value.trim().is_empty() {
                FieldValidationResult::ok()
            } else {
                validate_phone(&value)
            }
        })?;
    }
    if let Some(el) = get_element_by_id("dateOfBirth") {
        wire_live_validation(&el, |el| validate_date_of_birth(&element_value(el)))?;
    }

    if let Some(edit_btn) = get_element_by_id("editProfileBtn") {
        let form_el = form.clone();
        let editing = editing.clone();
        on_click(&edit_btn.clone(), move |_| {
            let now_editing = !*editing.borrow();
            *editing.borrow_mut() = now_editing;
            if let Err(e) = set_edit_mode(&form_el, &edit_btn, now_editing) {
                log::error!("❌ [PROFILE] edit toggle failed: {:?}", e);
            }
        })?;
    }

    if let Some(cancel_btn) = get_element_by_id("cancelEditBtn") {
        let form_el = form.clone();
        let editing = editing.clone();
        on_click(&cancel_btn, move |_| {
            *editing.borrow_mut() = false;
            if let Some(edit_btn) = get_element_by_id("editProfileBtn") {
                if let Err(e) = set_edit_mode(&form_el, &edit_btn, false) {
                    log::error!("❌ [PROFILE] cancel failed: {:?}", e);
                }
            }
        })?;
    }

    init_user_dropdown()?;

    {
        let form_el = form.clone();
        let state_for_submit = state.clone();
        let editing = editing.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if state_for_submit.is_pending() {
                log::warn!("⚠️ [PROFILE] Save ignored, one is already in flight");
                return;
            }

            let snapshot = ProfileSnapshot::collect();
            let results = validate_profile(&snapshot);

            let mut all_valid = true;
            for (field_id, result) in &results {
                all_valid &= result.valid;
                if let Some(el) = get_element_by_id(field_id) {
                    let _ = presenter::present(&el, result);
                }
            }
            if !all_valid {
                if let Some(message) = results
                    .iter()
                    .find_map(|(_, r)| (!r.valid).then_some(r.message).flatten())
                {
                    let _ = notify(message, NotificationKind::Error);
                }
                return;
            }

            if !state_for_submit.try_begin() {
                return;
            }
            let _ = notify("Saving changes...", NotificationKind::Info);

            let save_btn = form_el
                .query_selector("button[type='submit']")
                .ok()
                .flatten();
            if let Some(ref btn) = save_btn {
                let _ = presenter::set_loading_state(btn, true);
            }

            let state = state_for_submit.clone();
            let editing = editing.clone();
            let form_el = form_el.clone();
            spawn_local(async move {
                match AuthService::new().save_profile().await {
                    Ok(()) => {
                        if let Some(ref btn) = save_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        update_profile_header(&snapshot);
                        *editing.borrow_mut() = false;
                        if let Some(edit_btn) = get_element_by_id("editProfileBtn") {
                            let _ = set_edit_mode(&form_el, &edit_btn, false);
                        }
                        let _ = notify("Profile updated successfully!", NotificationKind::Success);
                        state.finish();
                    }
                    Err(e) => {
                        if let Some(ref btn) = save_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        log::error!("❌ [PROFILE] {}", e);
                        state.finish();
                    }
                }
            });
        })?;
    }

    Ok(())
}

/// Gates field mutability. `#email` is skipped on purpose: it identifies the
/// account and stays read-only in every mode.
fn set_edit_mode(form: &Element, edit_btn: &Element, editing: bool) -> Result<(), JsValue> {
    for field in query_selector_all_in(form, "input, select, textarea")? {
        let id = field.id();
        if id == "email" {
            continue;
        }
        let field_type = field.get_attribute("type").unwrap_or_default();
        if field_type == "submit" || field_type == "button" {
            continue;
        }
        if editing {
            remove_attribute(&field, "readonly")?;
            remove_attribute(&field, "disabled")?;
        } else if field_type == "checkbox" || field.tag_name().eq_ignore_ascii_case("select") {
            set_attribute(&field, "disabled", "disabled")?;
        } else {
            set_attribute(&field, "readonly", "readonly")?;
        }
    }

    if let Some(actions) = get_element_by_id("formActions") {
        set_style(&actions, "display", if editing { "flex" } else { "none" })?;
    }

    if editing {
        set_inner_html(edit_btn, "<i class=\"fas fa-times\"></i> Cancel Edit");
        remove_class(edit_btn, "btn-primary")?;
        add_class(edit_btn, "btn-secondary")?;
        add_class(form, "edit-mode")?;
        let _ = notify(
            "Edit mode enabled. Make your changes and click Save.",
            NotificationKind::Info,
        );
    } else {
        set_inner_html(edit_btn, "<i class=\"fas fa-edit\"></i> Edit Profile");
        remove_class(edit_btn, "btn-secondary")?;
        add_class(edit_btn, "btn-primary")?;
        remove_class(form, "edit-mode")?;
    }

    Ok(())
}

/// Mirrors the saved names into the header and the account dropdown.
fn update_profile_header(snapshot: &ProfileSnapshot) {
    if let Ok(Some(heading)) = query_selector(".profile-info h1") {
        set_text_content(
            &heading,
            &format!("{} {}", snapshot.first_name.trim(), snapshot.last_name.trim()),
        );
    }
    if let Ok(Some(username)) = query_selector("#userDropdown span") {
        set_text_content(&username, snapshot.first_name.trim());
    }
}

fn init_user_dropdown() -> Result<(), JsValue> {
    let (Some(dropdown), Some(menu)) = (
        get_element_by_id("userDropdown"),
        get_element_by_id("userDropdownMenu"),
    ) else {
        return Ok(());
    };

    {
        let menu = menu.clone();
        on_click(&dropdown.clone(), move |e: web_sys::MouseEvent| {
            e.prevent_default();
            let _ = menu.class_list().toggle("show");
        })?;
    }

    // Any click outside the trigger closes the menu.
    if let Some(doc) = document() {
        crate::dom::on_event::<web_sys::MouseEvent, _>(doc.as_ref(), "click", move |e| {
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !dropdown.contains(target.as_ref()) {
                let _ = remove_class(&menu, "show");
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_required() {
        let snapshot = ProfileSnapshot {
            first_name: "".into(),
            last_name: "Nguyen".into(),
            ..Default::default()
        };
        let results = validate_profile(&snapshot);
        let first = results.iter().find(|(id, _)| *id == "firstName").unwrap();
        assert!(!first.1.valid);
    }

    #[test]
    fn phone_and_birth_date_are_optional() {
        let snapshot = ProfileSnapshot {
            first_name: "Minh".into(),
            last_name: "Nguyen".into(),
            phone: "".into(),
            date_of_birth: "".into(),
            newsletter: true,
        };
        assert!(validate_profile(&snapshot).iter().all(|(_, r)| r.valid));
    }

    #[test]
    fn present_phone_is_still_validated() {
        let snapshot = ProfileSnapshot {
            first_name: "Minh".into(),
            last_name: "Nguyen".into(),
            phone: "abc".into(),
            ..Default::default()
        };
        let results = validate_profile(&snapshot);
        let phone = results.iter().find(|(id, _)| *id == "phone").unwrap();
        assert!(!phone.1.valid);
    }
}
