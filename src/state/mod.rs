// ============================================================================
// STATE - narrow, controller-owned state slices (Rc<RefCell>)
// ============================================================================

pub mod form_state;
pub mod search_state;

pub use form_state::FormState;
pub use search_state::{PriceFilter, SearchState};
