// ============================================================================
// SERVICES - external-collaborator seams (all mock, no network)
// ============================================================================

pub mod auth;
pub mod catalog;
pub mod session;

pub use auth::AuthService;
pub use session::SessionService;
