//! Field extraction helpers
//!
//! API records are loosely typed. A field is read from the first candidate
//! key holding a "truthy" value: absent, `null`, `false`, `0` and `""` all
//! fall through to the next key.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Placeholder for a missing value
pub const NOT_AVAILABLE: &str = "N/A";

/// Whether a JSON value counts as present
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Plain-text rendering of a scalar value
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// First truthy scalar among `keys`, as text
pub fn first_text(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .filter(|v| truthy(v))
        .find_map(scalar_text)
}

/// First truthy numeric value among `keys`; numeric strings are accepted
pub fn first_number(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .filter(|v| truthy(v))
        .find_map(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
}

/// Date from an ISO 8601 date or date-time field
pub fn date_field(record: &Value, key: &str) -> Option<NaiveDate> {
    let raw = record.get(key).and_then(Value::as_str)?.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Numbers print as given; whole numbers without a decimal point
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `MM/DD/YYYY`, or `N/A` when missing
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Upper-cased first character of the first non-empty candidate
pub fn initial(candidates: &[Option<&str>], fallback: char) -> char {
    candidates
        .iter()
        .flatten()
        .find_map(|s| s.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!(0.0)));
        assert!(!truthy(&json!("")));
        assert!(truthy(&json!("0")));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
        assert!(truthy(&json!(-1)));
    }

    #[test]
    fn test_first_text_fallback_chain() {
        let record = json!({"user_name": "", "user": "tony", "user_email": "t@x.io"});
        assert_eq!(
            first_text(&record, &["user_name", "user", "user_email"]),
            Some("tony".to_string())
        );
        assert_eq!(first_text(&record, &["missing"]), None);

        let numeric = json!({"user": 42});
        assert_eq!(first_text(&numeric, &["user"]), Some("42".to_string()));
    }

    #[test]
    fn test_first_number() {
        let record = json!({"total_calories": 0, "calories_burned": "350", "score": 900});
        assert_eq!(
            first_number(&record, &["total_calories", "calories_burned", "score"]),
            Some(350.0)
        );
        assert_eq!(first_number(&json!({"x": "abc"}), &["x"]), None);
    }

    #[test]
    fn test_date_formats() {
        let record = json!({
            "a": "2025-08-22",
            "b": "2025-08-22T10:15:00Z",
            "c": "2025-08-22T10:15:00.123456",
            "d": "yesterday",
        });
        let expected = NaiveDate::from_ymd_opt(2025, 8, 22);
        assert_eq!(date_field(&record, "a"), expected);
        assert_eq!(date_field(&record, "b"), expected);
        assert_eq!(date_field(&record, "c"), expected);
        assert_eq!(date_field(&record, "d"), None);
        assert_eq!(format_date(expected), "08/22/2025");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(45.0), "45");
        assert_eq!(format_number(12.34), "12.34");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial(&[None, Some(""), Some("bruce")], 'U'), 'B');
        assert_eq!(initial(&[None], 'U'), 'U');
    }
}
