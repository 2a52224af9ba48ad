// ============================================================================
// LOGIN FORM CONTROLLER
// ============================================================================
// Idle -> Validating -> (Invalid | Submitting) -> Redirecting. A submit
// while a simulated call is pending is ignored (FormState guard).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, input_value, on_submit};
use crate::forms::validators::{validate_email, validate_password, FieldValidationResult};
use crate::forms::{presenter, wire_live_validation, element_value};
use crate::services::{AuthService, SessionService};
use crate::state::FormState;
use crate::utils::constants::{HOME_URL, LOGIN_REDIRECT_DELAY_MS};
use crate::views::{notify, NotificationKind};

/// Field results for a login attempt; the form is submittable only when
/// both pass.
pub fn validate_login(email: &str, password: &str) -> (FieldValidationResult, FieldValidationResult) {
    (validate_email(email), validate_password(password))
}

/// No-op when the page has no `#loginForm`.
pub fn init() -> Result<(), JsValue> {
    let Some(form) = get_element_by_id("loginForm") else {
        return Ok(());
    };
    log::info!("🔑 [LOGIN] Wiring login form");

    let state = FormState::new();

    if let Some(email) = get_element_by_id("email") {
        wire_live_validation(&email, |el| validate_email(&element_value(el)))?;
    }
    if let Some(password) = get_element_by_id("password") {
        wire_live_validation(&password, |el| validate_password(&element_value(el)))?;
    }

    {
        let form_el = form.clone();
        let state_for_submit = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if state_for_submit.is_pending() {
                log::warn!("⚠️ [LOGIN] Submit ignored, a login is already in flight");
                return;
            }

            let email = input_value("email");
            let password = input_value("password");

            let (email_result, password_result) = validate_login(&email, &password);
            let mut all_valid = true;
            if let Some(el) = get_element_by_id("email") {
                all_valid &= email_result.valid;
                let _ = presenter::present(&el, &email_result);
            }
            if let Some(el) = get_element_by_id("password") {
                all_valid &= password_result.valid;
                let _ = presenter::present(&el, &password_result);
            }
            if !all_valid {
                return;
            }

            if !state_for_submit.try_begin() {
                return;
            }

            let submit_btn = form_el
                .query_selector("button[type='submit']")
                .ok()
                .flatten();
            if let Some(ref btn) = submit_btn {
                let _ = presenter::set_loading_state(btn, true);
            }

            let state = state_for_submit.clone();
            spawn_local(async move {
                match AuthService::new().login(&email).await {
                    Ok(session) => {
                        if let Some(ref btn) = submit_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        let _ = notify(
                            "Login successful! Redirecting...",
                            NotificationKind::Success,
                        );
                        if let Err(e) = SessionService::new().persist(&session) {
                            log::error!("❌ [LOGIN] {}", e);
                        }
                        // Stay pending through the redirect window so a second
                        // submit cannot race the navigation.
                        state.schedule_redirect(HOME_URL, LOGIN_REDIRECT_DELAY_MS);
                    }
                    Err(e) => {
                        if let Some(ref btn) = submit_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        let _ = notify("Invalid email or password", NotificationKind::Error);
                        log::error!("❌ [LOGIN] {}", e);
                        state.finish();
                    }
                }
            });
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_fails_with_required_message() {
        let (email, password) = validate_login("user@example.com", "");
        assert!(email.valid);
        assert!(!password.valid);
        assert_eq!(password.message, Some("Password is required"));
    }

    #[test]
    fn both_fields_must_pass_for_submission() {
        let (email, password) = validate_login("user@example.com", "secret1");
        assert!(email.valid && password.valid);

        let (email, password) = validate_login("not-an-email", "secret1");
        assert!(!email.valid && password.valid);
    }
}
