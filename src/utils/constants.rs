//! Timing and storage constants shared across controllers.

/// localStorage key holding the mock session record
pub const SESSION_STORAGE_KEY: &str = "userSession";

/// Session lifetime; older records are discarded on the next check
pub const SESSION_TTL_HOURS: i64 = 24;

// Simulated API latency per flow
pub const LOGIN_LATENCY_MS: u32 = 2_000;
pub const REGISTER_LATENCY_MS: u32 = 2_500;
pub const PROFILE_SAVE_LATENCY_MS: u32 = 1_000;
pub const QUICK_SEARCH_LATENCY_MS: u32 = 1_000;

// Delay between the success notification and the actual redirect
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 1_500;
pub const REGISTER_REDIRECT_DELAY_MS: u32 = 2_000;
pub const SESSION_REDIRECT_DELAY_MS: u32 = 1_500;

pub const HOME_URL: &str = "index.html";
pub const LOGIN_URL: &str = "login.html";

/// Auto-dismiss window for toast notifications; auth flows hold a little
/// longer than storefront feedback
pub const NOTIFICATION_DISMISS_MS: u32 = 4_000;
pub const NOTIFICATION_DISMISS_BRIEF_MS: u32 = 3_000;

pub const CAROUSEL_INTERVAL_MS: u32 = 5_000;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Header quick-search starts suggesting after this many characters
pub const SUGGESTION_MIN_CHARS: usize = 3;

// Price filter defaults when the numeric inputs are blank
pub const PRICE_MIN_DEFAULT: f64 = 0.0;
pub const PRICE_MAX_DEFAULT: f64 = 1_000.0;
/// Slider midpoint restored by the clear-all action
pub const PRICE_SLIDER_RESET: &str = "500";
