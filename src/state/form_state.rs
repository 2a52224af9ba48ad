// ============================================================================
// FORM STATE - pending guard + cancellable redirect for one form controller
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// One slice per form. `pending` guards against a second submit while a
/// simulated call is in flight; the redirect handle is held so the pending
/// navigation stays cancellable (dropping the state cancels it).
#[derive(Clone)]
pub struct FormState {
    pending: Rc<RefCell<bool>>,
    redirect: Rc<RefCell<Option<Timeout>>>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(false)),
            redirect: Rc::new(RefCell::new(None)),
        }
    }

    /// Marks the form busy. Returns false when a submission is already in
    /// flight, in which case the caller must ignore the event.
    pub fn try_begin(&self) -> bool {
        let mut pending = self.pending.borrow_mut();
        if *pending {
            return false;
        }
        *pending = true;
        true
    }

    pub fn finish(&self) {
        *self.pending.borrow_mut() = false;
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.borrow()
    }

    /// Schedules a navigation after `delay_ms`, replacing (and thereby
    /// cancelling) any previously scheduled one.
    pub fn schedule_redirect(&self, url: &'static str, delay_ms: u32) {
        let timeout = Timeout::new(delay_ms, move || crate::dom::redirect(url));
        *self.redirect.borrow_mut() = Some(timeout);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_until_finish() {
        let state = FormState::new();
        assert!(state.try_begin());
        assert!(!state.try_begin());
        assert!(state.is_pending());
        state.finish();
        assert!(state.try_begin());
    }

    #[test]
    fn clones_share_the_guard() {
        let state = FormState::new();
        let clone = state.clone();
        assert!(state.try_begin());
        assert!(!clone.try_begin());
    }
}
