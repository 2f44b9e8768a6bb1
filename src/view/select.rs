use serde_json::{Map, Value};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{lookup, ArrayView};
use crate::boxed::Boxed;
use crate::compare;
use crate::options::MatchMode;
use crate::path::Key;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_THRESHOLD;

/// Field conditions for [`ArrayView::filter_conditions`].
///
/// Every condition must hold for a record to be kept. Paths are read from
/// each record with the same lookup as [`ArrayView::get`]; an absent field
/// reads as `null`.
///
/// ```
/// use array_view::{ArrayView, Conditions, MatchMode};
/// use serde_json::json;
///
/// let view = ArrayView::from_value(json!([{"x": 1}, {"x": 2}, {"x": "1"}]));
/// let strict = Conditions::new()
///     .with("x", 1)
///     .with_match_mode(MatchMode::Strict);
/// assert_eq!(view.filter_conditions(&strict).count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    pub fields: Vec<(Key, Value)>,
    pub match_mode: MatchMode,
    /// Keep the original offsets instead of re-indexing from zero.
    pub preserve_keys: bool,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<Key>, expected: impl Into<Value>) -> Self {
        self.fields.push((key.into(), expected.into()));
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_preserve_keys(mut self, preserve_keys: bool) -> Self {
        self.preserve_keys = preserve_keys;
        self
    }

    pub fn matches(&self, record: &Value) -> bool {
        self.fields.iter().all(|(key, expected)| {
            let actual = lookup(record, key).unwrap_or(&Value::Null);
            compare::matches(self.match_mode, actual, expected)
        })
    }
}

impl From<Map<String, Value>> for Conditions {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, expected)| (key.into(), expected.into()))
                .collect(),
            ..Self::default()
        }
    }
}

/// Anything [`ArrayView::filter`] accepts: a predicate over boxed records,
/// or a set of [`Conditions`].
pub trait Filter {
    fn filter_view(&self, view: &ArrayView) -> ArrayView;
}

impl<F> Filter for F
where
    F: Fn(&Boxed) -> bool,
{
    fn filter_view(&self, view: &ArrayView) -> ArrayView {
        view.filter_callback(self)
    }
}

impl Filter for Conditions {
    fn filter_view(&self, view: &ArrayView) -> ArrayView {
        view.filter_conditions(self)
    }
}

impl ArrayView {
    /// Reads `key` from every record into a new collection.
    pub fn pluck(&self, key: impl Into<Key>) -> ArrayView {
        let key = key.into();
        self.records()
            .iter()
            .map(|record| lookup(record, &key).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Reads `key` from every record. Records without the field contribute
    /// a `null`, so positions line up with [`ArrayView::iter`].
    pub fn pluck_array(&self, key: impl Into<Key>) -> Vec<Boxed> {
        let key = key.into();
        self.records()
            .iter()
            .map(|record| Boxed::new(lookup(record, &key).cloned().unwrap_or(Value::Null)))
            .collect()
    }

    pub fn filter(&self, criteria: impl Filter) -> ArrayView {
        criteria.filter_view(self)
    }

    pub fn filter_callback(&self, mut predicate: impl FnMut(&Boxed) -> bool) -> ArrayView {
        self.records()
            .iter()
            .filter(|record| predicate(&Boxed::new((*record).clone())))
            .cloned()
            .collect()
    }

    pub fn filter_conditions(&self, conditions: &Conditions) -> ArrayView {
        let records = self.records();
        let kept = kept_offsets(&records, conditions);
        if !conditions.preserve_keys {
            return kept.into_iter().map(|index| records[index].clone()).collect();
        }
        let mut buffer = itoa::Buffer::new();
        let map: Map<String, Value> = kept
            .into_iter()
            .map(|index| (buffer.format(index).to_owned(), records[index].clone()))
            .collect();
        ArrayView::from_value(Value::Object(map))
    }
}

fn kept_offsets(records: &[Value], conditions: &Conditions) -> Vec<usize> {
    #[cfg(feature = "parallel")]
    {
        if records.len() >= PARALLEL_THRESHOLD {
            return records
                .par_iter()
                .enumerate()
                .filter(|(_, record)| conditions.matches(record))
                .map(|(index, _)| index)
                .collect();
        }
    }

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| conditions.matches(record))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[rstest::rstest]
    fn test_conditions_from_map() {
        let map = match json!({"sub.x": 1, "id": "2"}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let conditions = Conditions::from(map);
        assert!(conditions.matches(&json!({"id": 2, "sub": {"x": "1"}})));
        assert!(!conditions.matches(&json!({"id": 2})));
    }

    #[rstest::rstest]
    fn test_empty_conditions_keep_everything() {
        let view = ArrayView::from_value(json!([1, 2, 3]));
        assert_eq!(view.filter_conditions(&Conditions::new()).count(), 3);
    }

    #[rstest::rstest]
    fn test_absent_field_matches_null() {
        let conditions = Conditions::new().with("missing", Value::Null);
        assert!(conditions.matches(&json!({"id": 1})));
    }

    #[rstest::rstest]
    fn test_filter_on_node_returns_collection() {
        let node = ArrayView::from_value(json!({"id": 1}));
        let kept = node.filter_conditions(&Conditions::new().with("id", 1));
        assert!(kept.is_collection());
        assert_eq!(kept.to_value(), json!([{"id": 1}]));
    }
}
