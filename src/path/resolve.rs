use serde_json::{Map, Value};

use super::Segment;

pub(crate) fn child<'a>(value: &'a Value, segment: Segment<'_>) -> Option<&'a Value> {
    match value {
        Value::Array(items) => items.get(segment.as_index()?),
        Value::Object(map) => segment.with_field(|field| map.get(field)),
        _ => None,
    }
}

pub(crate) fn walk<'a>(start: &'a Value, segments: &[Segment<'_>]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(start, |current, segment| child(current, *segment))
}

/// Writes `value` at `segment` (then `rest`) below `target`.
///
/// Structure is created on the way down: scalars and nulls in the way are
/// replaced by mappings, an offset equal to an array's length appends, and
/// any other key into an array turns that array into a mapping keyed by the
/// decimal offsets it held.
pub(crate) fn write(target: &mut Value, segment: Segment<'_>, rest: &[Segment<'_>], value: Value) {
    if let Value::Array(items) = target {
        if let Some(index) = segment.as_index().filter(|index| *index <= items.len()) {
            write_element(items, index, rest, value);
            return;
        }
        let map = index_map(std::mem::take(items));
        *target = Value::Object(map);
    }
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    if let Value::Object(map) = target {
        segment.with_field(|field| write_field(map, field, rest, value));
    }
}

pub(crate) fn write_field(
    map: &mut Map<String, Value>,
    field: &str,
    rest: &[Segment<'_>],
    value: Value,
) {
    match rest.split_first() {
        None => {
            map.insert(field.to_owned(), value);
        }
        Some((next, tail)) => {
            let slot = map.entry(field.to_owned()).or_insert(Value::Null);
            write(slot, *next, tail, value);
        }
    }
}

/// `index` must be at most `items.len()`; the length itself appends.
pub(crate) fn write_element(items: &mut Vec<Value>, index: usize, rest: &[Segment<'_>], value: Value) {
    debug_assert!(index <= items.len());
    if index == items.len() {
        items.push(Value::Null);
    }
    match rest.split_first() {
        None => items[index] = value,
        Some((next, tail)) => write(&mut items[index], *next, tail, value),
    }
}

fn index_map(items: Vec<Value>) -> Map<String, Value> {
    let mut buffer = itoa::Buffer::new();
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (buffer.format(index).to_owned(), item))
        .collect()
}
