use std::io::Write;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use crate::{EncodeOptions, Error, Result};

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &EncodeOptions) -> Result<String> {
    let bytes = to_vec(value, options)?;
    String::from_utf8(bytes).map_err(|err| Error::encode(format!("invalid utf-8: {err}")))
}

pub fn to_vec<T: Serialize + ?Sized>(value: &T, options: &EncodeOptions) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, value, options)?;
    Ok(out)
}

pub fn to_writer<T: Serialize + ?Sized, W: Write>(
    writer: W,
    value: &T,
    options: &EncodeOptions,
) -> Result<()> {
    match options.indent {
        Some(indent) => {
            let indent = indent.as_bytes();
            write_with(writer, value, PrettyFormatter::with_indent(&indent))
        }
        None => write_with(writer, value, CompactFormatter),
    }
}

fn write_with<T, W, F>(writer: W, value: &T, formatter: F) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
    F: Formatter,
{
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| Error::encode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io;

    use serde_json::json;

    use super::*;
    use crate::{ErrorKind, Indent};

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest::rstest]
    fn test_compact_and_pretty() {
        let value = json!({"id": 1, "tags": ["a"]});
        assert_eq!(
            to_string(&value, &EncodeOptions::default()).unwrap(),
            r#"{"id":1,"tags":["a"]}"#
        );
        assert_eq!(
            to_string(&value, &EncodeOptions::new().with_indent(Indent::spaces(4))).unwrap(),
            "{\n    \"id\": 1,\n    \"tags\": [\n        \"a\"\n    ]\n}"
        );
    }

    #[rstest::rstest]
    fn test_writer_failure_is_an_encode_error() {
        let err = to_writer(BrokenWriter, &json!([1]), &EncodeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
    }

    #[rstest::rstest]
    fn test_unrepresentable_map_key_is_an_encode_error() {
        let mut value = std::collections::BTreeMap::new();
        value.insert(vec![1u8], 1);
        let err = to_string(&value, &EncodeOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encode);
    }
}
