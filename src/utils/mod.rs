// ============================================================================
// UTILS - constants, storage and timing helpers
// ============================================================================

pub mod constants;
pub mod debounce;
pub mod storage;

pub use debounce::Debounce;
