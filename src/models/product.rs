// ============================================================================
// PRODUCT MODEL - entry in the mock catalog
// ============================================================================

/// One catalog record. The catalog is hardcoded, so borrowed statics are
/// enough; records are copied freely into result sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductRecord {
    pub name: &'static str,
    pub price: f64,
    pub category: &'static str,
}

impl ProductRecord {
    pub const fn new(name: &'static str, price: f64, category: &'static str) -> Self {
        Self {
            name,
            price,
            category,
        }
    }
}
