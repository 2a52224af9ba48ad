// ============================================================================
// VIEWS - dynamically created DOM fragments
// ============================================================================

pub mod notification;
pub mod results;

pub use notification::{notify, notify_for, NotificationKind};
pub use results::render_results;
