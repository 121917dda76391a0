//! Loose equality between claim values
//!
//! Claim values travel as JSON and may change representation between issuer
//! and verifier (`30` vs `30.0`, `30` vs `"30"`, `"30"` vs `"30.0"`).
//! Comparison therefore works on the scalar value rather than on the JSON type.

use serde_json::{Number, Value};

/// Compare an expected claim value against a decoded one
pub(crate) fn loose_eq(expected: &Value, found: &Value) -> bool {
    match (expected, found) {
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            numeric_string_eq(s, n)
        }
        (Value::String(a), Value::String(b)) => a == b || numeric_strings_eq(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(x, y))
        }
        _ => expected == found,
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn numeric_string_eq(s: &str, n: &Number) -> bool {
    let Some(s) = numeric(s) else {
        return false;
    };
    if let (Ok(x), Some(y)) = (s.parse::<i64>(), n.as_i64()) {
        return x == y;
    }
    match (s.parse::<f64>(), n.as_f64()) {
        (Ok(x), Some(y)) => x == y,
        _ => false,
    }
}

fn numeric_strings_eq(a: &str, b: &str) -> bool {
    let (Some(a), Some(b)) = (numeric(a), numeric(b)) else {
        return false;
    };
    if let (Ok(x), Ok(y)) = (a.parse::<i64>(), b.parse::<i64>()) {
        return x == y;
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// Trimmed `s` if it reads as a decimal number
///
/// Rejects words `f64::from_str` would accept, such as `inf` or `NaN`.
fn numeric(s: &str) -> Option<&str> {
    let s = s.trim();
    let decimal = !s.is_empty()
        && s.bytes().any(|b| b.is_ascii_digit())
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    decimal.then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings() {
        assert!(loose_eq(&json!("u1"), &json!("u1")));
        assert!(!loose_eq(&json!("u1"), &json!("u2")));
        assert!(!loose_eq(&json!("u1"), &json!("U1")));
    }

    #[test]
    fn test_numbers() {
        assert!(loose_eq(&json!(30), &json!(30)));
        assert!(loose_eq(&json!(30), &json!(30.0)));
        assert!(!loose_eq(&json!(30), &json!(31)));
    }

    #[test]
    fn test_numeric_strings() {
        assert!(loose_eq(&json!(30), &json!("30")));
        assert!(loose_eq(&json!("1700000000"), &json!(1_700_000_000)));
        assert!(!loose_eq(&json!(30), &json!("thirty")));
    }

    #[test]
    fn test_two_numeric_strings() {
        assert!(loose_eq(&json!("30"), &json!("30.0")));
        assert!(loose_eq(&json!("1e3"), &json!("1000")));
        assert!(loose_eq(&json!(" 30"), &json!("30")));
        assert!(!loose_eq(&json!("30"), &json!("31")));
        assert!(!loose_eq(&json!("inf"), &json!("infinity")));
        assert!(!loose_eq(&json!("abc"), &json!("abd")));
        assert!(!loose_eq(&json!("-"), &json!("+")));
    }

    #[test]
    fn test_mismatched_types() {
        assert!(!loose_eq(&json!("api"), &json!(["api"])));
        assert!(!loose_eq(&json!(true), &json!("true")));
        assert!(loose_eq(&json!(["a", 1]), &json!(["a", "1"])));
    }
}
