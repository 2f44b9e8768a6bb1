//! The node/collection view.
//!
//! An [`ArrayView`] wraps either a single record (node mode) or an ordered
//! list of records (collection mode). The mode is picked from the shape of
//! the data when the view is built and only ever moves from node to
//! collection, when a list-shaped mutator such as [`ArrayView::push`] runs
//! against a node.
//!
//! Reads go through the same normalized dot-path lookup in both modes, so
//! `view.get("id")` reads the record's `id` on a node and the first record's
//! `id` on a collection. Nested arrays and mappings come back boxed into new
//! views (see [`Boxed`]).
//!
//! ```
//! use array_view::ArrayView;
//! use serde_json::json;
//!
//! let view = ArrayView::from_value(json!([{"id": 1}, {"id": 2}]));
//! assert!(view.is_collection());
//! assert_eq!(view.get("id").and_then(|id| id.as_i64()), Some(1));
//! assert_eq!(view.get("1.id").and_then(|id| id.as_i64()), Some(2));
//! ```

mod collection;
mod iter;
mod select;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::boxed::Boxed;
use crate::path::{self, Key, Segment};
use crate::{DecodeOptions, EncodeOptions, Error, Result};

pub use iter::{IntoIter, Iter};
pub use select::{Conditions, Filter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Node,
    Collection,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Data {
    Node(Map<String, Value>),
    Collection(Vec<Value>),
}

impl Data {
    fn child(&self, segment: Segment<'_>) -> Option<&Value> {
        match self {
            Data::Node(map) => segment.with_field(|field| map.get(field)),
            Data::Collection(items) => items.get(segment.as_index()?),
        }
    }
}

impl Default for Data {
    fn default() -> Self {
        Data::Collection(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayView {
    data: Data,
}

impl ArrayView {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps raw data. Arrays, empty mappings and mappings keyed `"0"` to
    /// `"n-1"` in order become collections; other mappings become nodes.
    /// Scalars and `null` carry no records and yield an empty collection.
    pub fn from_value(value: Value) -> Self {
        let data = match value {
            Value::Array(items) => Data::Collection(items),
            Value::Object(map) if is_sequential(&map) => {
                Data::Collection(map.into_iter().map(|(_, item)| item).collect())
            }
            Value::Object(map) => Data::Node(map),
            _ => Data::default(),
        };
        Self { data }
    }

    pub fn from_json(input: &str) -> Result<Self> {
        crate::decode::from_str(input, &DecodeOptions::default())
    }

    pub fn from_json_with_options(input: &str, options: &DecodeOptions) -> Result<Self> {
        crate::decode::from_str(input, options)
    }

    pub fn to_json(&self) -> Result<String> {
        crate::encode::to_string(self, &EncodeOptions::default())
    }

    pub fn to_json_with_options(&self, options: &EncodeOptions) -> Result<String> {
        crate::encode::to_string(self, options)
    }

    /// A copy of the underlying data.
    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }

    pub fn into_value(self) -> Value {
        match self.data {
            Data::Node(map) => Value::Object(map),
            Data::Collection(items) => Value::Array(items),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.data {
            Data::Node(_) => Mode::Node,
            Data::Collection(_) => Mode::Collection,
        }
    }

    pub fn is_collection(&self) -> bool {
        self.mode() == Mode::Collection
    }

    /// Number of records; a node always counts as one.
    pub fn count(&self) -> usize {
        match &self.data {
            Data::Node(_) => 1,
            Data::Collection(items) => items.len(),
        }
    }

    pub fn has_items(&self) -> bool {
        self.count() > 0
    }

    /// The key `key` resolves to in the current mode.
    pub fn normalized_key(&self, key: impl Into<Key>) -> Key {
        key.into().normalize(self.is_collection())
    }

    /// True when `key` resolves to a non-null value.
    ///
    /// A field that is present but holds `null` reports `false`, the same
    /// as a missing one.
    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.resolve(&key.into()).is_some()
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<Boxed> {
        self.resolve(&key.into()).cloned().map(Boxed::new)
    }

    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Boxed {
        self.get(key).unwrap_or_else(|| Boxed::new(default.into()))
    }

    /// Like [`ArrayView::get`] without boxing.
    pub fn get_raw(&self, key: impl Into<Key>) -> Option<&Value> {
        self.resolve(&key.into())
    }

    pub fn get_raw_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.get_raw(key).cloned().unwrap_or_else(|| default.into())
    }

    pub fn get_or_fail(&self, key: impl Into<Key>) -> Result<Boxed> {
        let key = key.into();
        self.get(&key).ok_or_else(|| Error::property_not_found(key.to_string()))
    }

    /// Writes `value` at the dot-path `key`, creating intermediate mappings.
    ///
    /// Views are unboxed into plain data first. On a collection the first
    /// segment must address an existing record or the slot right after the
    /// last one.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        let key = self.normalized_key(key);
        let segments = key.segments();
        let Some((first, rest)) = segments.split_first() else {
            return Ok(self);
        };
        let value = value.into();
        tracing::trace!(key = %key, "set");
        match &mut self.data {
            Data::Node(map) => first.with_field(|field| path::write_field(map, field, rest, value)),
            Data::Collection(items) => {
                let index = first
                    .as_index()
                    .filter(|index| *index <= items.len())
                    .ok_or_else(|| Error::invalid_index(first))?;
                path::write_element(items, index, rest, value);
            }
        }
        Ok(self)
    }

    /// [`ArrayView::set`], skipped when `key` does not currently resolve.
    pub fn set_if_exists(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let key = key.into();
        if !self.has(&key) {
            return Ok(self);
        }
        self.set(key, value)
    }

    /// Node mode returns the view itself.
    pub fn first(&self) -> Option<Boxed> {
        match &self.data {
            Data::Node(_) => Some(Boxed::View(self.clone())),
            Data::Collection(items) => items.first().cloned().map(Boxed::new),
        }
    }

    pub fn last(&self) -> Option<Boxed> {
        match &self.data {
            Data::Node(_) => Some(Boxed::View(self.clone())),
            Data::Collection(items) => items.last().cloned().map(Boxed::new),
        }
    }

    pub fn each(&self, mut callback: impl FnMut(Boxed)) -> &Self {
        for item in self {
            callback(item);
        }
        self
    }

    pub(crate) fn eq_value(&self, other: &Value) -> bool {
        match (&self.data, other) {
            (Data::Node(map), Value::Object(other)) => map == other,
            (Data::Collection(items), Value::Array(other)) => items == other,
            _ => false,
        }
    }

    /// The records as a slice; a node is presented as a one-element list.
    pub(crate) fn records(&self) -> Cow<'_, [Value]> {
        match &self.data {
            Data::Node(map) => Cow::Owned(vec![Value::Object(map.clone())]),
            Data::Collection(items) => Cow::Borrowed(items),
        }
    }

    fn resolve(&self, key: &Key) -> Option<&Value> {
        let key = key.normalize(self.is_collection());
        let segments = key.segments();
        let (first, rest) = segments.split_first()?;
        path::walk(self.data.child(*first)?, rest).filter(|value| !value.is_null())
    }
}

/// Reads `key` from a raw record the way a view over that record would.
pub(crate) fn lookup<'a>(record: &'a Value, key: &Key) -> Option<&'a Value> {
    let collection = match record {
        Value::Array(_) => true,
        Value::Object(map) => is_sequential(map),
        _ => return None,
    };
    let key = key.normalize(collection);
    let segments = key.segments();
    path::walk(record, &segments).filter(|value| !value.is_null())
}

fn is_sequential(map: &Map<String, Value>) -> bool {
    let mut buffer = itoa::Buffer::new();
    map.keys()
        .enumerate()
        .all(|(index, key)| key == buffer.format(index))
}

impl From<Value> for ArrayView {
    fn from(value: Value) -> Self {
        ArrayView::from_value(value)
    }
}

impl From<ArrayView> for Value {
    fn from(view: ArrayView) -> Self {
        view.into_value()
    }
}

impl From<&ArrayView> for Value {
    fn from(view: &ArrayView) -> Self {
        view.to_value()
    }
}

impl FromIterator<Value> for ArrayView {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            data: Data::Collection(iter.into_iter().collect()),
        }
    }
}

impl FromStr for ArrayView {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        ArrayView::from_json(input)
    }
}

impl fmt::Display for ArrayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for ArrayView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match &self.data {
            Data::Node(map) => map.serialize(serializer),
            Data::Collection(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ArrayView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ArrayView::from_value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[rstest::rstest]
    #[case(json!({"id": 1}), Mode::Node)]
    #[case(json!([{"id": 1}]), Mode::Collection)]
    #[case(json!([]), Mode::Collection)]
    #[case(json!({}), Mode::Collection)]
    #[case(json!({"0": "a", "1": "b"}), Mode::Collection)]
    #[case(json!({"1": "a", "0": "b"}), Mode::Node)]
    #[case(json!({"0": "a", "2": "b"}), Mode::Node)]
    #[case(json!(null), Mode::Collection)]
    #[case(json!("text"), Mode::Collection)]
    fn test_mode_detection(#[case] raw: Value, #[case] expected: Mode) {
        assert_eq!(ArrayView::from_value(raw).mode(), expected);
    }

    #[rstest::rstest]
    fn test_sequential_mapping_becomes_list() {
        let view = ArrayView::from_value(json!({"0": "a", "1": "b"}));
        assert_eq!(view.to_value(), json!(["a", "b"]));
    }

    #[rstest::rstest]
    fn test_lookup_on_raw_records() {
        let record = json!({"sub": {"x": 1}});
        assert_eq!(lookup(&record, &Key::from("sub.x")), Some(&json!(1)));

        let list = json!([{"id": 4}]);
        assert_eq!(lookup(&list, &Key::from("id")), Some(&json!(4)));

        assert_eq!(lookup(&json!(3), &Key::from("id")), None);
        assert_eq!(lookup(&json!({"a": null}), &Key::from("a")), None);
    }

    #[rstest::rstest]
    fn test_records_wraps_node() {
        let node = ArrayView::from_value(json!({"id": 1}));
        assert_eq!(node.records().as_ref(), &[json!({"id": 1})]);
        let list = ArrayView::from_value(json!([1, 2]));
        assert!(matches!(list.records(), Cow::Borrowed(_)));
    }

    #[rstest::rstest]
    fn test_display_is_compact_json() {
        let view = ArrayView::from_value(json!({"id": 1, "tags": ["a"]}));
        assert_eq!(view.to_string(), r#"{"id":1,"tags":["a"]}"#);
    }
}
