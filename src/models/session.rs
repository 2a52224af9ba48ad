// ============================================================================
// SESSION MODEL - locally persisted stand-in for a real session
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted under a single localStorage key. Field names stay camelCase to
/// match the record the storefront has always written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub email: String,
    #[serde(rename = "loginTime")]
    pub login_time: String,
}

impl SessionRecord {
    pub fn new(email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            login_time: now.to_rfc3339(),
        }
    }

    /// Parsed login timestamp; `None` when the stored string is not a valid
    /// ISO-8601 date.
    pub fn login_time(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.login_time)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}
