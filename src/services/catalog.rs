// ============================================================================
// MOCK CATALOG - static product list standing in for the inventory service
// ============================================================================

use crate::models::ProductRecord;

/// Seed data; insertion order is the order every query returns.
pub const CATALOG: [ProductRecord; 8] = [
    ProductRecord::new("Paracetamol 500mg", 12.99, "Pain Relief"),
    ProductRecord::new("Vitamin C 1000mg", 25.50, "Vitamins"),
    ProductRecord::new("Aspirin 100mg", 8.75, "Pain Relief"),
    ProductRecord::new("Ibuprofen 400mg", 15.20, "Pain Relief"),
    ProductRecord::new("Amoxicillin 250mg", 35.00, "Antibiotics"),
    ProductRecord::new("Multivitamin Complex", 45.99, "Vitamins"),
    ProductRecord::new("Omega-3 Fish Oil", 28.75, "Supplements"),
    ProductRecord::new("Calcium + D3", 22.50, "Vitamins"),
];

/// Case-insensitive substring match on the name (empty query matches all)
/// AND inclusive price range. Pure; preserves catalog order.
pub fn search(name_query: &str, min_price: f64, max_price: f64) -> Vec<ProductRecord> {
    let query = name_query.trim().to_lowercase();

    CATALOG
        .iter()
        .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
        .filter(|p| p.price >= min_price && p.price <= max_price)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_all_in_seed_order() {
        let results = search("", 0.0, 1000.0);
        assert_eq!(results.len(), 8);
        let names: Vec<_> = results.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "Paracetamol 500mg",
                "Vitamin C 1000mg",
                "Aspirin 100mg",
                "Ibuprofen 400mg",
                "Amoxicillin 250mg",
                "Multivitamin Complex",
                "Omega-3 Fish Oil",
                "Calcium + D3",
            ]
        );
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let results = search("vitamin", 0.0, 1000.0);
        let names: Vec<_> = results.iter().map(|p| p.name).collect();
        // "Multivitamin Complex" matches because it is a substring match,
        // not a prefix match.
        assert_eq!(names, vec!["Vitamin C 1000mg", "Multivitamin Complex"]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let results = search("", 20.0, 30.0);
        let names: Vec<_> = results.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["Vitamin C 1000mg", "Omega-3 Fish Oil", "Calcium + D3"]
        );
        // 15.20 sits below the window
        assert!(!names.contains(&"Ibuprofen 400mg"));

        // Exact boundary values are included on both ends
        assert_eq!(search("", 12.99, 12.99).len(), 1);
    }

    #[test]
    fn combined_filters_intersect() {
        let results = search("vitamin", 30.0, 50.0);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Multivitamin Complex");
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search("insulin", 0.0, 1000.0).is_empty());
        assert!(search("", 100.0, 200.0).is_empty());
    }
}
