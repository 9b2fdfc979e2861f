//! Response normalization
//!
//! Collection endpoints answer either with a paginated object
//! (`{"count": n, "results": [...]}`) or with a bare array. Both are reduced
//! to an ordered list of records here; anything else is an empty list.

use serde_json::Value;

/// Field holding the page of records in a paginated response
pub const RESULTS_FIELD: &str = "results";

/// Extract the ordered record sequence from a decoded payload.
///
/// Never fails: unrecognized shapes yield an empty sequence.
pub fn normalize(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match map.remove(RESULTS_FIELD) {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        },
        Value::Array(records) => records,
        _ => Vec::new(),
    }
}

/// Shape the payload arrived in, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Paginated,
    BareArray,
    Unrecognized,
}

impl PayloadShape {
    pub fn of(payload: &Value) -> Self {
        match payload {
            Value::Object(map) if map.get(RESULTS_FIELD).is_some_and(Value::is_array) => {
                PayloadShape::Paginated
            }
            Value::Array(_) => PayloadShape::BareArray,
            _ => PayloadShape::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_results_preserve_order() {
        let payload = json!({
            "count": 3,
            "next": null,
            "results": [{"id": 3}, {"id": 1}, {"id": 2}]
        });
        assert_eq!(PayloadShape::of(&payload), PayloadShape::Paginated);

        let records = normalize(payload);
        let ids: Vec<i64> = records.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_bare_array_used_unchanged() {
        let payload = json!([{"name": "Alpha"}, "loose", 7]);
        let records = normalize(payload.clone());
        assert_eq!(Value::Array(records), payload);
    }

    #[test]
    fn test_unrecognized_shapes_are_empty() {
        for payload in [
            json!({"detail": "nothing here"}),
            json!({"results": null}),
            json!({"results": {"id": 1}}),
            json!({"results": "x"}),
            json!("string"),
            json!(42),
            json!(true),
            Value::Null,
        ] {
            assert_eq!(PayloadShape::of(&payload), PayloadShape::Unrecognized);
            assert!(normalize(payload).is_empty());
        }
    }

    #[test]
    fn test_empty_results() {
        assert!(normalize(json!({"results": []})).is_empty());
        assert!(normalize(json!([])).is_empty());
    }
}
