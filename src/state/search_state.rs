// ============================================================================
// SEARCH STATE - query + price filter slice owned by the search controller
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::constants::{PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};

/// Inclusive price window. The slider always mirrors `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFilter {
    pub min: f64,
    pub max: f64,
}

impl Default for PriceFilter {
    fn default() -> Self {
        Self {
            min: PRICE_MIN_DEFAULT,
            max: PRICE_MAX_DEFAULT,
        }
    }
}

/// Blank or garbage input falls back to the default rather than failing.
pub fn parse_price(raw: &str, default: f64) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(default)
}

#[derive(Clone)]
pub struct SearchState {
    query: Rc<RefCell<String>>,
    filter: Rc<RefCell<PriceFilter>>,
    active_tag: Rc<RefCell<Option<usize>>>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: Rc::new(RefCell::new(String::new())),
            filter: Rc::new(RefCell::new(PriceFilter::default())),
            active_tag: Rc::new(RefCell::new(None)),
        }
    }

    pub fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_lowercase();
    }

    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    pub fn set_min(&self, raw: &str) {
        self.filter.borrow_mut().min = parse_price(raw, PRICE_MIN_DEFAULT);
    }

    pub fn set_max(&self, raw: &str) {
        self.filter.borrow_mut().max = parse_price(raw, PRICE_MAX_DEFAULT);
    }

    pub fn filter(&self) -> PriceFilter {
        *self.filter.borrow()
    }

    /// Quick-filter tags set both bounds atomically and are mutually
    /// exclusive: applying one deactivates whichever was active before.
    pub fn apply_tag(&self, index: usize, min: f64, max: f64) {
        *self.filter.borrow_mut() = PriceFilter { min, max };
        *self.active_tag.borrow_mut() = Some(index);
    }

    pub fn active_tag(&self) -> Option<usize> {
        *self.active_tag.borrow()
    }

    pub fn clear(&self) {
        self.query.borrow_mut().clear();
        *self.filter.borrow_mut() = PriceFilter::default();
        *self.active_tag.borrow_mut() = None;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_whole_catalog_range() {
        let state = SearchState::new();
        assert_eq!(
            state.filter(),
            PriceFilter {
                min: 0.0,
                max: 1000.0
            }
        );
        assert_eq!(state.active_tag(), None);
    }

    #[test]
    fn blank_price_input_falls_back_to_default() {
        let state = SearchState::new();
        state.set_min("  ");
        state.set_max("not a number");
        assert_eq!(state.filter(), PriceFilter::default());

        state.set_min("20");
        state.set_max("30.5");
        assert_eq!(
            state.filter(),
            PriceFilter {
                min: 20.0,
                max: 30.5
            }
        );
    }

    #[test]
    fn tags_are_mutually_exclusive() {
        let state = SearchState::new();
        state.apply_tag(0, 0.0, 10.0);
        assert_eq!(state.active_tag(), Some(0));

        // Selecting tag B after tag A leaves only B active.
        state.apply_tag(2, 25.0, 50.0);
        assert_eq!(state.active_tag(), Some(2));
        assert_eq!(
            state.filter(),
            PriceFilter {
                min: 25.0,
                max: 50.0
            }
        );
    }

    #[test]
    fn clear_resets_everything() {
        let state = SearchState::new();
        state.set_query("VITAMIN");
        state.apply_tag(1, 10.0, 25.0);
        state.clear();
        assert_eq!(state.query(), "");
        assert_eq!(state.filter(), PriceFilter::default());
        assert_eq!(state.active_tag(), None);
    }

    #[test]
    fn query_is_lowercased_on_the_way_in() {
        let state = SearchState::new();
        state.set_query("ViTaMiN");
        assert_eq!(state.query(), "vitamin");
    }
}
