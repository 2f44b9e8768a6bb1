use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::path::Key;
use crate::view::ArrayView;

/// A value read out of a view.
///
/// Arrays and mappings come back wrapped in a fresh [`ArrayView`]; every
/// other value is passed through as-is. The wrapped view owns a copy of the
/// data, so changing it never reaches back into the view it was read from.
///
/// Boxing runs the same mode detection as [`ArrayView::from_value`]: an
/// empty mapping or one keyed `"0"` to `"n-1"` in order becomes a
/// collection. Writing such a value back through [`ArrayView::set`] stores
/// it as a list, so `{}` reads back and serializes as `[]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Boxed {
    View(ArrayView),
    Scalar(Value),
}

impl Boxed {
    pub fn new(value: Value) -> Self {
        match value {
            Value::Array(_) | Value::Object(_) => Boxed::View(ArrayView::from_value(value)),
            scalar => Boxed::Scalar(scalar),
        }
    }

    /// Chained lookup; scalars have no fields.
    pub fn get(&self, key: impl Into<Key>) -> Option<Boxed> {
        self.as_view()?.get(key)
    }

    pub fn is_view(&self) -> bool {
        matches!(self, Boxed::View(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Boxed::Scalar(Value::Null))
    }

    pub fn as_view(&self) -> Option<&ArrayView> {
        match self {
            Boxed::View(view) => Some(view),
            Boxed::Scalar(_) => None,
        }
    }

    pub fn into_view(self) -> Option<ArrayView> {
        match self {
            Boxed::View(view) => Some(view),
            Boxed::Scalar(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Boxed::View(_) => None,
            Boxed::Scalar(value) => Some(value),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_value().and_then(Value::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(Value::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(Value::as_bool)
    }

    /// Unboxes back into plain data.
    pub fn into_value(self) -> Value {
        match self {
            Boxed::View(view) => view.into_value(),
            Boxed::Scalar(value) => value,
        }
    }
}

impl From<Value> for Boxed {
    fn from(value: Value) -> Self {
        Boxed::new(value)
    }
}

impl From<ArrayView> for Boxed {
    fn from(view: ArrayView) -> Self {
        Boxed::View(view)
    }
}

impl From<Boxed> for Value {
    fn from(boxed: Boxed) -> Self {
        boxed.into_value()
    }
}

impl PartialEq<Value> for Boxed {
    fn eq(&self, other: &Value) -> bool {
        match self {
            Boxed::View(view) => view.eq_value(other),
            Boxed::Scalar(value) => value == other,
        }
    }
}

impl Serialize for Boxed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Boxed::View(view) => view.serialize(serializer),
            Boxed::Scalar(value) => value.serialize(serializer),
        }
    }
}
