use serde_json::Value;

use super::{ArrayView, Data};
use crate::boxed::Boxed;
use crate::{Error, Result};

impl ArrayView {
    /// Turns a node into a one-element collection holding that record.
    /// Collections are left alone.
    fn force_collection(&mut self) -> &mut Vec<Value> {
        if let Data::Node(map) = &mut self.data {
            tracing::debug!(fields = map.len(), "forcing node into a collection");
            let record = Value::Object(std::mem::take(map));
            self.data = Data::Collection(vec![record]);
        }
        match &mut self.data {
            Data::Collection(items) => items,
            Data::Node(_) => unreachable!("node was converted to a collection above"),
        }
    }

    pub fn push(&mut self, value: impl Into<Value>) -> &mut Self {
        self.force_collection().push(value.into());
        self
    }

    pub fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.force_collection()
            .extend(values.into_iter().map(Into::into));
        self
    }

    pub fn unshift(&mut self, value: impl Into<Value>) -> &mut Self {
        self.force_collection().insert(0, value.into());
        self
    }

    /// Prepends `values`, keeping their order: `unshift_all([a, b])` on
    /// `[c]` gives `[a, b, c]`.
    pub fn unshift_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items = self.force_collection();
        let tail = std::mem::take(items);
        items.extend(values.into_iter().map(Into::into));
        items.extend(tail);
        self
    }

    pub fn pop(&mut self) -> Result<Boxed> {
        self.force_collection()
            .pop()
            .map(Boxed::new)
            .ok_or_else(|| Error::empty_collection("pop"))
    }

    pub fn shift(&mut self) -> Result<Boxed> {
        let items = self.force_collection();
        if items.is_empty() {
            return Err(Error::empty_collection("shift"));
        }
        Ok(Boxed::new(items.remove(0)))
    }

    /// Indexed read. A node only has offset 0, which is the node itself.
    pub fn at(&self, index: usize) -> Result<Boxed> {
        self.get_at(index).ok_or_else(|| Error::invalid_index(index))
    }

    /// Non-failing form of [`ArrayView::at`].
    pub fn get_at(&self, index: usize) -> Option<Boxed> {
        match &self.data {
            Data::Node(_) => (index == 0).then(|| Boxed::View(self.clone())),
            Data::Collection(items) => items.get(index).cloned().map(Boxed::new),
        }
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.count()
    }

    /// Replaces the record at `index`, or appends when `index` equals the
    /// current count. Any other offset fails and leaves the view untouched.
    pub fn set_at(&mut self, index: usize, value: impl Into<Value>) -> Result<&mut Self> {
        if index > self.count() {
            return Err(Error::invalid_index(index));
        }
        tracing::trace!(index, "set_at");
        let items = self.force_collection();
        let value = value.into();
        if index == items.len() {
            items.push(value);
        } else {
            items[index] = value;
        }
        Ok(self)
    }

    /// Removes the record at `index`; later records move down by one.
    pub fn remove_at(&mut self, index: usize) -> Result<Boxed> {
        if !self.contains_index(index) {
            return Err(Error::invalid_index(index));
        }
        tracing::trace!(index, "remove_at");
        Ok(Boxed::new(self.force_collection().remove(index)))
    }
}
