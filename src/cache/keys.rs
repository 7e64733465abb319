//! Cache Key Builders
//!
//! Canonical key strings for memoized queries. Identical logical queries
//! must produce identical keys no matter where they are built, so list
//! keys serialize their filter set through `serde_json::Value`, whose
//! object representation keeps member keys sorted.
//!
//! Key layout: `<namespace>:detail:<id>[:<variant>]`,
//! `<namespace>:list:<canonical-json>`, `<namespace>:stats`.

use serde::Serialize;

use crate::error::Result;

// == Detail Keys ==
/// Key for a single-entity read.
pub fn detail_key(namespace: &str, id: &str) -> String {
    format!("{}:detail:{}", namespace, id)
}

/// Key for a single-entity read with a named expansion, such as a
/// property fetched together with its images.
pub fn detail_variant_key(namespace: &str, id: &str, variant: &str) -> String {
    format!("{}:detail:{}:{}", namespace, id, variant)
}

/// Prefix covering every variant of one entity.
///
/// The trailing separator keeps id `42` from matching id `421`.
pub fn detail_prefix(namespace: &str, id: &str) -> String {
    format!("{}:detail:{}:", namespace, id)
}

// == List Keys ==
/// Key for a list/search read parameterized by a filter set.
///
/// The filter set is canonicalized through JSON with sorted object keys,
/// so field insertion order never changes the key.
pub fn list_key<F: Serialize>(namespace: &str, filters: &F) -> Result<String> {
    let canonical = serde_json::to_value(filters)?;
    Ok(format!("{}:list:{}", namespace, canonical))
}

/// Prefix covering every cached list/search result of a resource.
pub fn list_prefix(namespace: &str) -> String {
    format!("{}:list:", namespace)
}

// == Stats Key ==
/// Key for a resource's aggregate statistics read.
pub fn stats_key(namespace: &str) -> String {
    format!("{}:stats", namespace)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_key() {
        assert_eq!(detail_key("properties", "42"), "properties:detail:42");
    }

    #[test]
    fn test_detail_variant_key() {
        assert_eq!(
            detail_variant_key("properties", "42", "images"),
            "properties:detail:42:images"
        );
    }

    #[test]
    fn test_detail_prefix_does_not_cover_longer_ids() {
        let prefix = detail_prefix("properties", "42");
        assert!(detail_variant_key("properties", "42", "images").starts_with(&prefix));
        assert!(!detail_key("properties", "421").starts_with(&prefix));
    }

    #[test]
    fn test_list_key_shape() {
        let key = list_key("properties", &json!({"city": "Lisbon", "page": 2})).unwrap();
        assert_eq!(key, r#"properties:list:{"city":"Lisbon","page":2}"#);
        assert!(key.starts_with(&list_prefix("properties")));
    }

    #[test]
    fn test_list_key_deterministic_across_insertion_order() {
        // serde_json objects are sorted maps, so building the same filter
        // set in a different order yields the same key.
        let a = list_key("properties", &json!({"city": "Lisbon", "max_price": 120})).unwrap();
        let b = list_key("properties", &json!({"max_price": 120, "city": "Lisbon"})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_list_key_from_struct_filters() {
        #[derive(Serialize)]
        struct Filters {
            city: String,
            guests: u8,
        }

        let first = list_key(
            "properties",
            &Filters {
                city: "Porto".to_string(),
                guests: 4,
            },
        )
        .unwrap();
        let second = list_key(
            "properties",
            &Filters {
                city: "Porto".to_string(),
                guests: 4,
            },
        )
        .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stats_key() {
        assert_eq!(stats_key("bookings"), "bookings:stats");
    }
}
