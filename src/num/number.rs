use serde_json::Number;

/// Largest magnitude at which an integral float is still printed without an exponent.
const PLAIN_FLOAT_LIMIT: f64 = 1e15;

/// Text form of a number as it takes part in loose comparisons.
pub fn format_number(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        return itoa::Buffer::new().format(value).to_owned();
    }
    if let Some(value) = number.as_u64() {
        return itoa::Buffer::new().format(value).to_owned();
    }
    match number.as_f64() {
        Some(value) => format_f64(value),
        None => number.to_string(),
    }
}

fn format_f64(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.fract() == 0.0 && value.abs() < PLAIN_FLOAT_LIMIT {
        return itoa::Buffer::new().format(value as i64).to_owned();
    }
    let mut buffer = ryu::Buffer::new();
    let raw = buffer.format_finite(value);
    raw.strip_suffix(".0").unwrap_or(raw).to_owned()
}

/// Parses a numeric string: optional surrounding whitespace, optional sign,
/// decimal digits with an optional fraction and exponent.
pub fn parse_numeric(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    let first = body.bytes().next()?;
    if !(first.is_ascii_digit() || first == b'.') {
        return None;
    }
    if !body
        .bytes()
        .all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn as_f64(number: &Number) -> f64 {
    number
        .as_i64()
        .map(|value| value as f64)
        .or_else(|| number.as_u64().map(|value| value as f64))
        .or_else(|| number.as_f64())
        .unwrap_or(f64::NAN)
}
