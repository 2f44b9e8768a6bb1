//! Dot-path keys and their resolution against JSON data.
//!
//! A [`Key`] is either a plain offset or a dotted path such as `"sub.x"` or
//! `"2.id"`. Before a key is resolved against a view it is normalized: in
//! collection mode a path that does not already start with an offset is
//! redirected to the first element, so `collection.get("id")` reads the
//! first record's `id`.

mod resolve;

use std::fmt;

use smallvec::SmallVec;
use smol_str::{format_smolstr, SmolStr};

use crate::constants::{has_index_prefix, is_index_segment, FALLBACK_INDEX, PATH_SEPARATOR};

pub(crate) use resolve::{walk, write_element, write_field};

pub(crate) type Segments<'a> = SmallVec<[Segment<'a>; 8]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Path(SmolStr),
}

impl Key {
    pub fn path(path: impl AsRef<str>) -> Self {
        Key::Path(SmolStr::new(path))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Path(_) => None,
        }
    }

    pub fn as_path(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Path(path) => Some(path),
        }
    }

    /// Applies the collection fallback: paths without a leading offset are
    /// prefixed with `0.` when `collection` is set. Offsets and paths that
    /// already start with `digits.` are returned unchanged.
    pub fn normalize(&self, collection: bool) -> Key {
        match self {
            Key::Path(path) if collection && !has_index_prefix(path) => {
                Key::Path(format_smolstr!("{FALLBACK_INDEX}.{path}"))
            }
            _ => self.clone(),
        }
    }

    pub(crate) fn segments(&self) -> Segments<'_> {
        match self {
            Key::Index(index) => smallvec::smallvec![Segment::Index(*index)],
            Key::Path(path) => split_path(path).into_iter().map(Segment::Field).collect(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => f.write_str(itoa::Buffer::new().format(*index)),
            Key::Path(path) => f.write_str(path),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(index as usize)
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        match usize::try_from(index) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Path(SmolStr::new(itoa::Buffer::new().format(index))),
        }
    }
}

// Negative integers can only ever name a mapping key, so they become paths.
impl From<i64> for Key {
    fn from(index: i64) -> Self {
        match usize::try_from(index) {
            Ok(index) => Key::Index(index),
            Err(_) => Key::Path(SmolStr::new(itoa::Buffer::new().format(index))),
        }
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::from(index as i64)
    }
}

impl From<&str> for Key {
    fn from(path: &str) -> Self {
        Key::Path(SmolStr::new(path))
    }
}

impl From<String> for Key {
    fn from(path: String) -> Self {
        Key::Path(SmolStr::from(path))
    }
}

impl From<&String> for Key {
    fn from(path: &String) -> Self {
        Key::Path(SmolStr::new(path))
    }
}

impl From<SmolStr> for Key {
    fn from(path: SmolStr) -> Self {
        Key::Path(path)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

/// One step of a resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Index(usize),
    Field(&'a str),
}

impl Segment<'_> {
    /// The array offset this segment addresses, if any.
    pub(crate) fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Field(field) if is_index_segment(field) => field.parse().ok(),
            Segment::Field(_) => None,
        }
    }

    /// Runs `f` with the mapping key this segment addresses.
    pub(crate) fn with_field<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match self {
            Segment::Index(index) => f(itoa::Buffer::new().format(*index)),
            Segment::Field(field) => f(field),
        }
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_field(|field| f.write_str(field))
    }
}

pub(crate) fn split_path(path: &str) -> SmallVec<[&str; 8]> {
    let mut parts = SmallVec::new();
    let mut start = 0;
    for pos in memchr::memchr_iter(PATH_SEPARATOR, path.as_bytes()) {
        parts.push(&path[start..pos]);
        start = pos + 1;
    }
    parts.push(&path[start..]);
    parts
}
