use std::{slice, vec};

use serde_json::Value;

use super::{ArrayView, Data};
use crate::boxed::Boxed;

/// Borrowing iterator over boxed records. A node yields itself once.
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Node(Option<&'a ArrayView>),
    Collection(slice::Iter<'a, Value>),
}

impl Iterator for Iter<'_> {
    type Item = Boxed;

    fn next(&mut self) -> Option<Boxed> {
        match &mut self.inner {
            IterInner::Node(view) => view.take().map(|view| Boxed::View(view.clone())),
            IterInner::Collection(items) => items.next().cloned().map(Boxed::new),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            IterInner::Node(view) => usize::from(view.is_some()),
            IterInner::Collection(items) => items.len(),
        };
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Boxed> {
        match &mut self.inner {
            IterInner::Node(view) => view.take().map(|view| Boxed::View(view.clone())),
            IterInner::Collection(items) => items.next_back().cloned().map(Boxed::new),
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

pub struct IntoIter {
    inner: IntoIterInner,
}

enum IntoIterInner {
    Node(Option<ArrayView>),
    Collection(vec::IntoIter<Value>),
}

impl Iterator for IntoIter {
    type Item = Boxed;

    fn next(&mut self) -> Option<Boxed> {
        match &mut self.inner {
            IntoIterInner::Node(view) => view.take().map(Boxed::View),
            IntoIterInner::Collection(items) => items.next().map(Boxed::new),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.inner {
            IntoIterInner::Node(view) => usize::from(view.is_some()),
            IntoIterInner::Collection(items) => items.len(),
        };
        (len, Some(len))
    }
}

impl ExactSizeIterator for IntoIter {}

impl ArrayView {
    pub fn iter(&self) -> Iter<'_> {
        let inner = match &self.data {
            Data::Node(_) => IterInner::Node(Some(self)),
            Data::Collection(items) => IterInner::Collection(items.iter()),
        };
        Iter { inner }
    }
}

impl<'a> IntoIterator for &'a ArrayView {
    type Item = Boxed;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for ArrayView {
    type Item = Boxed;
    type IntoIter = IntoIter;

    fn into_iter(self) -> IntoIter {
        let inner = match self.data {
            Data::Node(_) => IntoIterInner::Node(Some(self)),
            Data::Collection(items) => IntoIterInner::Collection(items.into_iter()),
        };
        IntoIter { inner }
    }
}
