pub const PATH_SEPARATOR: u8 = b'.';

/// Index every collection-mode field lookup falls back to.
pub const FALLBACK_INDEX: &str = "0";

pub const DEFAULT_MAX_DEPTH: usize = 512;

#[cfg(feature = "parallel")]
pub(crate) const PARALLEL_THRESHOLD: usize = 256;

/// Canonical decimal index: digits only, no leading zero except `"0"` itself.
#[inline]
pub fn is_index_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    match bytes.first() {
        None => false,
        Some(b'0') => bytes.len() == 1,
        Some(_) => bytes.iter().all(u8::is_ascii_digit),
    }
}

/// True when `path` starts with `digits.`, i.e. it already addresses an offset.
#[inline]
pub fn has_index_prefix(path: &str) -> bool {
    let bytes = path.as_bytes();
    let digits = bytes.iter().take_while(|byte| byte.is_ascii_digit()).count();
    digits > 0 && bytes.get(digits) == Some(&PATH_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_is_index_segment() {
        assert!(is_index_segment("0"));
        assert!(is_index_segment("42"));
        assert!(!is_index_segment(""));
        assert!(!is_index_segment("-1"));
        assert!(!is_index_segment("1a"));
        assert!(!is_index_segment("id"));
        assert!(!is_index_segment("07"));
    }

    #[rstest::rstest]
    #[case("0.id", true)]
    #[case("12.sub.x", true)]
    #[case("id", false)]
    #[case("1", false)]
    #[case(".id", false)]
    #[case("1a.id", false)]
    fn test_has_index_prefix(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(has_index_prefix(path), expected);
    }
}
