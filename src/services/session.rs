// ============================================================================
// SESSION SERVICE - mock session persistence and expiry
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use wasm_bindgen::prelude::*;

use crate::models::SessionRecord;
use crate::utils::constants::{SESSION_REDIRECT_DELAY_MS, SESSION_STORAGE_KEY, SESSION_TTL_HOURS};
use crate::utils::storage;
use crate::views::notification::{notify, NotificationKind};

/// Outcome of inspecting the raw stored value. Pure so expiry policy can be
/// tested without a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Missing,
    Active(SessionRecord),
    Expired,
    Malformed,
}

/// Decides what the stored value means at `now`. Unparseable JSON and
/// unparseable timestamps are both malformed, never an error.
pub fn evaluate_session(raw: Option<&str>, now: DateTime<Utc>) -> SessionStatus {
    let Some(raw) = raw else {
        return SessionStatus::Missing;
    };

    let Ok(record) = serde_json::from_str::<SessionRecord>(raw) else {
        return SessionStatus::Malformed;
    };

    let Some(login_time) = record.login_time() else {
        return SessionStatus::Malformed;
    };

    if now.signed_duration_since(login_time) < Duration::hours(SESSION_TTL_HOURS) {
        SessionStatus::Active(record)
    } else {
        SessionStatus::Expired
    }
}

pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Checks the persisted record. An active session notifies and schedules
    /// a redirect to the homepage; expired or malformed records are deleted.
    pub fn check_session(&self) -> Result<bool, JsValue> {
        match evaluate_session(storage::load_raw(SESSION_STORAGE_KEY).as_deref(), Utc::now()) {
            SessionStatus::Missing => Ok(false),
            SessionStatus::Active(record) => {
                log::info!("🔑 [SESSION] Active session for {}", record.email);
                notify("You are already logged in. Redirecting...", NotificationKind::Info)?;
                crate::dom::redirect_after(
                    crate::utils::constants::HOME_URL,
                    SESSION_REDIRECT_DELAY_MS,
                );
                Ok(true)
            }
            SessionStatus::Expired => {
                log::info!("⏰ [SESSION] Session expired, clearing stored record");
                self.clear();
                Ok(false)
            }
            SessionStatus::Malformed => {
                log::warn!("⚠️ [SESSION] Malformed session record, clearing");
                self.clear();
                Ok(false)
            }
        }
    }

    pub fn persist(&self, record: &SessionRecord) -> Result<(), String> {
        storage::save_json(SESSION_STORAGE_KEY, record)?;
        log::info!("💾 [SESSION] Session saved for {}", record.email);
        Ok(())
    }

    pub fn clear(&self) {
        if let Err(e) = storage::remove(SESSION_STORAGE_KEY) {
            log::error!("❌ [SESSION] {}", e);
        }
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_aged(hours: i64, now: DateTime<Utc>) -> String {
        let record = SessionRecord::new("user@example.com", now - Duration::hours(hours));
        serde_json::to_string(&record).unwrap()
    }

    #[test]
    fn absent_record_is_missing() {
        assert_eq!(evaluate_session(None, Utc::now()), SessionStatus::Missing);
    }

    #[test]
    fn record_23_hours_old_is_active() {
        let now = Utc::now();
        let raw = record_aged(23, now);
        match evaluate_session(Some(&raw), now) {
            SessionStatus::Active(record) => assert_eq!(record.email, "user@example.com"),
            other => panic!("expected active, got {:?}", other),
        }
    }

    #[test]
    fn record_25_hours_old_is_expired() {
        let now = Utc::now();
        let raw = record_aged(25, now);
        assert_eq!(evaluate_session(Some(&raw), now), SessionStatus::Expired);
    }

    #[test]
    fn exactly_24_hours_is_expired() {
        let now = Utc::now();
        let raw = record_aged(24, now);
        assert_eq!(evaluate_session(Some(&raw), now), SessionStatus::Expired);
    }

    #[test]
    fn malformed_json_is_malformed() {
        assert_eq!(
            evaluate_session(Some("{not json"), Utc::now()),
            SessionStatus::Malformed
        );
    }

    #[test]
    fn bad_timestamp_is_malformed() {
        let raw = r#"{"email":"user@example.com","loginTime":"yesterday"}"#;
        assert_eq!(
            evaluate_session(Some(raw), Utc::now()),
            SessionStatus::Malformed
        );
    }

    #[test]
    fn stored_record_round_trips_original_key_names() {
        let raw = r#"{"email":"a@b.co","loginTime":"2026-08-20T10:00:00+00:00"}"#;
        let record: SessionRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.email, "a@b.co");
        assert!(record.login_time().is_some());
    }
}
