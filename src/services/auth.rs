// ============================================================================
// AUTH SERVICE - simulated remote calls for the form controllers
// ============================================================================
// Every call resolves after a fixed latency and succeeds unconditionally;
// this is the seam a real backend client would replace. Latency is awaited
// (TimeoutFuture), never slept, so the UI thread keeps running.
// ============================================================================

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;

use crate::models::SessionRecord;
use crate::utils::constants::{LOGIN_LATENCY_MS, PROFILE_SAVE_LATENCY_MS, REGISTER_LATENCY_MS};

pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Simulated login call; resolves to the session record to persist.
    pub async fn login(&self, email: &str) -> Result<SessionRecord, String> {
        log::info!("🔐 [AUTH] login({}) - simulating remote call", email);
        TimeoutFuture::new(LOGIN_LATENCY_MS).await;
        Ok(SessionRecord::new(email, Utc::now()))
    }

    /// Simulated account creation; no session is established.
    pub async fn register(&self, email: &str) -> Result<(), String> {
        log::info!("📝 [AUTH] register({}) - simulating remote call", email);
        TimeoutFuture::new(REGISTER_LATENCY_MS).await;
        Ok(())
    }

    /// Simulated profile save; echoes the accepted update back.
    pub async fn save_profile(&self) -> Result<(), String> {
        log::info!("👤 [AUTH] save_profile - simulating remote call");
        TimeoutFuture::new(PROFILE_SAVE_LATENCY_MS).await;
        Ok(())
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
