// ============================================================================
// UI - page effects: carousel, animations, accessibility, responsive, cart
// ============================================================================

pub mod accessibility;
pub mod animations;
pub mod carousel;
pub mod cart;
pub mod responsive;
