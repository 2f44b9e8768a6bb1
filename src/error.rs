use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Decode,
    Encode,
    PropertyNotFound,
    InvalidIndex,
    EmptyCollection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("json decode failed: {message}")]
    Decode { message: String },

    #[error("json encode failed: {message}")]
    Encode { message: String },

    #[error("missing property '{key}'")]
    PropertyNotFound { key: String },

    #[error("invalid offset: {index}")]
    InvalidIndex { index: String },

    #[error("cannot {operation} an empty collection")]
    EmptyCollection { operation: &'static str },
}

impl Error {
    pub fn decode(message: impl Into<String>) -> Self {
        Error::Decode {
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Error::Encode {
            message: message.into(),
        }
    }

    pub fn property_not_found(key: impl Into<String>) -> Self {
        Error::PropertyNotFound { key: key.into() }
    }

    pub fn invalid_index(index: impl fmt::Display) -> Self {
        Error::InvalidIndex {
            index: index.to_string(),
        }
    }

    pub fn empty_collection(operation: &'static str) -> Self {
        Error::EmptyCollection { operation }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::PropertyNotFound { .. } => ErrorKind::PropertyNotFound,
            Error::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            Error::EmptyCollection { .. } => ErrorKind::EmptyCollection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_error_messages() {
        assert_eq!(
            Error::property_not_found("sub.x").to_string(),
            "missing property 'sub.x'"
        );
        assert_eq!(Error::invalid_index(5).to_string(), "invalid offset: 5");
        assert_eq!(
            Error::empty_collection("pop").to_string(),
            "cannot pop an empty collection"
        );
        assert_eq!(
            Error::decode("expected value at line 1 column 1").to_string(),
            "json decode failed: expected value at line 1 column 1"
        );
    }

    #[rstest::rstest]
    fn test_error_kind() {
        assert_eq!(Error::decode("x").kind(), ErrorKind::Decode);
        assert_eq!(Error::encode("x").kind(), ErrorKind::Encode);
        assert_eq!(Error::invalid_index(0).kind(), ErrorKind::InvalidIndex);
    }
}
