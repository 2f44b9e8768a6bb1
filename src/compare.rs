//! Equality used by condition filters.

use serde_json::{Map, Value};

use crate::num::number::{as_f64, format_number, parse_numeric};
use crate::options::MatchMode;

pub fn matches(mode: MatchMode, actual: &Value, expected: &Value) -> bool {
    match mode {
        MatchMode::Loose => loose_eq(actual, expected),
        MatchMode::Strict => actual == expected,
    }
}

/// Truthiness of a value: `null`, `false`, zero, `""`, `"0"` and empty
/// containers are falsy.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => as_f64(number) != 0.0,
        Value::String(text) => !(text.is_empty() || text == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Type-juggling equality.
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => truthy(other) == *flag,
        (Value::Null, Value::String(text)) | (Value::String(text), Value::Null) => text.is_empty(),
        (Value::Null, other) | (other, Value::Null) => !truthy(other),
        (Value::Number(a), Value::Number(b)) => as_f64(a) == as_f64(b),
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => match parse_numeric(text) {
            Some(parsed) => as_f64(number) == parsed,
            None => format_number(number) == *text,
        },
        (Value::String(a), Value::String(b)) => match (parse_numeric(a), parse_numeric(b)) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| loose_eq(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(key, value)| b.get(key).is_some_and(|other| loose_eq(value, other)))
        }
        (Value::Array(items), Value::Object(map)) | (Value::Object(map), Value::Array(items)) => {
            array_matches_map(items, map)
        }
        _ => false,
    }
}

fn array_matches_map(items: &[Value], map: &Map<String, Value>) -> bool {
    let mut buffer = itoa::Buffer::new();
    items.len() == map.len()
        && items.iter().enumerate().all(|(index, item)| {
            map.get(buffer.format(index))
                .is_some_and(|other| loose_eq(item, other))
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[rstest::rstest]
    #[case(json!(1), json!(1), true)]
    #[case(json!(1), json!(1.0), true)]
    #[case(json!(1), json!("1"), true)]
    #[case(json!("1.0"), json!("1"), true)]
    #[case(json!(1), json!("abc"), false)]
    #[case(json!(2), json!("2"), true)]
    #[case(json!("abc"), json!("abc"), true)]
    #[case(json!(true), json!("x"), true)]
    #[case(json!(false), json!(0), true)]
    #[case(json!(false), json!("0"), true)]
    #[case(json!(null), json!(0), true)]
    #[case(json!(null), json!(""), true)]
    #[case(json!(null), json!("0"), false)]
    #[case(json!(null), json!(null), true)]
    #[case(json!([1, 2]), json!(["1", 2]), true)]
    #[case(json!({"a": 1}), json!({"a": "1"}), true)]
    #[case(json!([1]), json!({"0": 1}), true)]
    #[case(json!([1]), json!(1), false)]
    fn test_loose_eq(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
        assert_eq!(loose_eq(&left, &right), expected);
        assert_eq!(loose_eq(&right, &left), expected);
    }

    #[rstest::rstest]
    fn test_strict_mode_is_structural() {
        assert!(matches(MatchMode::Strict, &json!(1), &json!(1)));
        assert!(!matches(MatchMode::Strict, &json!(1), &json!("1")));
        assert!(!matches(MatchMode::Strict, &json!(1), &json!(1.0)));
        assert!(matches(MatchMode::Loose, &json!(1), &json!("1")));
    }

    #[rstest::rstest]
    fn test_truthy() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!("0")));
        assert!(!truthy(&json!([])));
        assert!(!truthy(&json!(0.0)));
        assert!(truthy(&json!("false")));
        assert!(truthy(&json!({"a": null})));
    }
}
