use std::io::Read;

use serde_json::Value;

use crate::view::ArrayView;
use crate::{DecodeOptions, Error, Result};

pub fn from_str(input: &str, options: &DecodeOptions) -> Result<ArrayView> {
    let value = serde_json::from_str(input).map_err(decode_failed)?;
    finish(value, options)
}

pub fn from_slice(input: &[u8], options: &DecodeOptions) -> Result<ArrayView> {
    let value = serde_json::from_slice(input).map_err(decode_failed)?;
    finish(value, options)
}

pub fn from_reader<R: Read>(reader: R, options: &DecodeOptions) -> Result<ArrayView> {
    let value = serde_json::from_reader(reader).map_err(decode_failed)?;
    finish(value, options)
}

fn decode_failed(err: serde_json::Error) -> Error {
    tracing::debug!(error = %err, "json decode failed");
    Error::decode(err.to_string())
}

fn finish(value: Value, options: &DecodeOptions) -> Result<ArrayView> {
    if depth(&value) > options.max_depth {
        return Err(Error::decode(format!(
            "maximum nesting depth of {} exceeded",
            options.max_depth
        )));
    }
    Ok(ArrayView::from_value(value))
}

/// Container nesting depth: scalars are 0, `[1]` is 1, `[[1]]` is 2.
fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}
