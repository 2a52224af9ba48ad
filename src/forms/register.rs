// ============================================================================
// REGISTER FORM CONTROLLER
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, input_checked, input_value, on_submit};
use crate::forms::validators::{
    validate_email, validate_name, validate_password, validate_phone, validate_terms,
    FieldValidationResult,
};
use crate::forms::{element_checked, element_value, presenter, wire_live_validation};
use crate::services::AuthService;
use crate::state::FormState;
use crate::utils::constants::{LOGIN_URL, REGISTER_REDIRECT_DELAY_MS};
use crate::views::{notify, NotificationKind};

/// Raw values assembled at submit time; validated, then either discarded or
/// handed to the simulated register call.
#[derive(Debug, Clone, Default)]
pub struct RegisterSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub agree_terms: bool,
}

impl RegisterSnapshot {
    fn collect() -> Self {
        Self {
            first_name: input_value("firstName"),
            last_name: input_value("lastName"),
            email: input_value("email"),
            phone: input_value("phone"),
            password: input_value("password"),
            agree_terms: input_checked("agreeTerms"),
        }
    }
}

/// Per-field results keyed by element id, in presentation order.
pub fn validate_register(s: &RegisterSnapshot) -> Vec<(&'static str, FieldValidationResult)> {
    vec![
        ("firstName", validate_name(&s.first_name)),
        ("lastName", validate_name(&s.last_name)),
        ("email", validate_email(&s.email)),
        ("phone", validate_phone(&s.phone)),
        ("password", validate_password(&s.password)),
        ("agreeTerms", validate_terms(s.agree_terms)),
    ]
}

/// No-op when the page has no `#registerForm`.
pub fn init() -> Result<(), JsValue> {
    let Some(form) = get_element_by_id("registerForm") else {
        return Ok(());
    };
    log::info!("📝 [REGISTER] Wiring register form");

    let state = FormState::new();

    for id in ["firstName", "lastName"] {
        if let Some(el) = get_element_by_id(id) {
            wire_live_validation(&el, |el| validate_name(&element_value(el)))?;
        }
    }
    if let Some(el) = get_element_by_id("email") {
        wire_live_validation(&el, |el| validate_email(&element_value(el)))?;
    }
    if let Some(el) = get_element_by_id("phone") {
        wire_live_validation(&el, |el| validate_phone(&element_value(el)))?;
    }
    if let Some(el) = get_element_by_id("password") {
        wire_live_validation(&el, |el| validate_password(&element_value(el)))?;
    }
    if let Some(el) = get_element_by_id("agreeTerms") {
        wire_live_validation(&el, |el| validate_terms(element_checked(el)))?;
    }

    {
        let form_el = form.clone();
        let state_for_submit = state.clone();
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            if state_for_submit.is_pending() {
                log::warn!("⚠️ [REGISTER] Submit ignored, registration already in flight");
                return;
            }

            let snapshot = RegisterSnapshot::collect();
            let results = validate_register(&snapshot);

            let mut all_valid = true;
            for (field_id, result) in &results {
                all_valid &= result.valid;
                if let Some(el) = get_element_by_id(field_id) {
                    let _ = presenter::present(&el, result);
                }
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
                match AuthService::new().register(&snapshot.email).await {
                    Ok(()) => {
                        if let Some(ref btn) = submit_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        let _ = notify(
                            "Account created successfully! Please log in.",
                            NotificationKind::Success,
                        );
                        state.schedule_redirect(LOGIN_URL, REGISTER_REDIRECT_DELAY_MS);
                    }
                    Err(e) => {
                        if let Some(ref btn) = submit_btn {
                            let _ = presenter::set_loading_state(btn, false);
                        }
                        log::error!("❌ [REGISTER] {}", e);
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

    fn valid_snapshot() -> RegisterSnapshot {
        RegisterSnapshot {
            first_name: "Minh".into(),
            last_name: "Nguyen".into(),
            email: "minh@example.com".into(),
            phone: "+84 912 345 678".into(),
            password: "secret1".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn fully_valid_snapshot_passes_every_field() {
        assert!(validate_register(&valid_snapshot())
            .iter()
            .all(|(_, r)| r.valid));
    }

    #[test]
    fn one_bad_field_fails_the_aggregate() {
        let mut snapshot = valid_snapshot();
        snapshot.agree_terms = false;
        let results = validate_register(&snapshot);
        assert!(!results.iter().all(|(_, r)| r.valid));

        let terms = results.iter().find(|(id, _)| *id == "agreeTerms").unwrap();
        assert_eq!(
            terms.1.message,
            Some("You must agree to the terms and conditions")
        );
    }

    #[test]
    fn results_are_keyed_by_element_id() {
        let ids: Vec<_> = validate_register(&valid_snapshot())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec!["firstName", "lastName", "email", "phone", "password", "agreeTerms"]
        );
    }
}
