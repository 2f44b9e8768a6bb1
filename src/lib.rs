//! Node/collection views over JSON data with dot-path addressing.
//!
//! [`ArrayView`] presents decoded JSON either as a single record or as an
//! ordered list of records behind one API. See the [`view`] module for the
//! rules that govern the two modes.

pub mod boxed;
pub mod compare;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod num;
pub mod options;
pub mod path;
pub mod view;

use std::io::{Read, Write};

pub use crate::boxed::Boxed;
pub use crate::error::{Error, ErrorKind};
pub use crate::options::{DecodeOptions, EncodeOptions, Indent, MatchMode};
pub use crate::path::Key;
pub use crate::view::{ArrayView, Conditions, Filter, IntoIter, Iter, Mode};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str(input: &str) -> Result<ArrayView> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<ArrayView> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<ArrayView> {
    from_slice_with_options(input, &DecodeOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &DecodeOptions) -> Result<ArrayView> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<ArrayView> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &DecodeOptions) -> Result<ArrayView> {
    decode::from_reader(reader, options)
}

pub fn to_string(view: &ArrayView) -> Result<String> {
    to_string_with_options(view, &EncodeOptions::default())
}

pub fn to_string_pretty(view: &ArrayView) -> Result<String> {
    to_string_with_options(view, &EncodeOptions::pretty())
}

pub fn to_string_with_options(view: &ArrayView, options: &EncodeOptions) -> Result<String> {
    encode::to_string(view, options)
}

pub fn to_vec(view: &ArrayView) -> Result<Vec<u8>> {
    to_vec_with_options(view, &EncodeOptions::default())
}

pub fn to_vec_with_options(view: &ArrayView, options: &EncodeOptions) -> Result<Vec<u8>> {
    encode::to_vec(view, options)
}

pub fn to_writer<W: Write>(writer: W, view: &ArrayView) -> Result<()> {
    to_writer_with_options(writer, view, &EncodeOptions::default())
}

pub fn to_writer_with_options<W: Write>(
    writer: W,
    view: &ArrayView,
    options: &EncodeOptions,
) -> Result<()> {
    encode::to_writer(writer, view, options)
}
