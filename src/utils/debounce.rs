// ============================================================================
// DEBOUNCE - trailing-edge debounce built on a cancellable Timeout
// ============================================================================

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Each `call()` replaces the pending timeout, so the wrapped function runs
/// once, `delay_ms` after the last call. Dropping the handle cancels it.
#[derive(Clone)]
pub struct Debounce {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
    f: Rc<dyn Fn()>,
}

impl Debounce {
    pub fn new<F: Fn() + 'static>(delay_ms: u32, f: F) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            f: Rc::new(f),
        }
    }

    pub fn call(&self) {
        let f = self.f.clone();
        let timeout = Timeout::new(self.delay_ms, move || f());
        // Replacing the previous handle drops it, which cancels the timer.
        // A handle that already fired is cleared harmlessly on the next call.
        *self.pending.borrow_mut() = Some(timeout);
    }
}
