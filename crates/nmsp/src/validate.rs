//! Validation of dotted paths.
//!
//! The resolver and merger accept any string; these checks are for callers
//! taking paths from untrusted input, such as the `nmsp` binary.

use crate::types::SEPARATOR;
use crate::PathError;

/// Maximum allowed path string length, in bytes.
const MAX_PATH_LENGTH: usize = 1024;

/// Maximum allowed path depth.
const MAX_PATH_DEPTH: usize = 256;

/// Validate a dotted path.
///
/// # Errors
///
/// - [`PathError::Empty`] for `""`
/// - [`PathError::TooLong`] above 1024 bytes
/// - [`PathError::TooDeep`] above 256 segments
/// - [`PathError::EmptySegment`] for `"a..b"`, `".a"` or `"a."`
///
/// # Example
///
/// ```
/// use nmsp::validate_path;
///
/// validate_path("a.b.c").unwrap();
/// validate_path("a..c").unwrap_err();
/// validate_path("").unwrap_err();
/// ```
pub fn validate_path(path: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::TooLong);
    }
    let mut depth = 0;
    for (index, segment) in path.split(SEPARATOR).enumerate() {
        if segment.is_empty() {
            return Err(PathError::EmptySegment { index });
        }
        depth += 1;
    }
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::TooDeep);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_paths() {
        assert!(validate_path("a").is_ok());
        assert!(validate_path("a.b").is_ok());
        assert!(validate_path("a.b.c.d.e").is_ok());
    }

    #[test]
    fn test_validate_counts_segments_by_separator() {
        assert_eq!(SEPARATOR, '.');
        assert_eq!(validate_path("a/b"), Ok(()));
        assert_eq!(validate_path("a.b."), Err(PathError::EmptySegment { index: 2 }));
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(validate_path(""), Err(PathError::Empty));
    }

    #[test]
    fn test_validate_empty_segments() {
        assert_eq!(validate_path("a..b"), Err(PathError::EmptySegment { index: 1 }));
        assert_eq!(validate_path(".a"), Err(PathError::EmptySegment { index: 0 }));
        assert_eq!(validate_path("a."), Err(PathError::EmptySegment { index: 1 }));
        assert_eq!(validate_path("."), Err(PathError::EmptySegment { index: 0 }));
    }

    #[test]
    fn test_validate_long_path() {
        let long = "a".repeat(2000);
        assert_eq!(validate_path(&long), Err(PathError::TooLong));
    }

    #[test]
    fn test_validate_deep_path() {
        let deep = vec!["a"; 300].join(".");
        assert_eq!(validate_path(&deep), Err(PathError::TooDeep));

        let max = vec!["a"; 256].join(".");
        assert!(validate_path(&max).is_ok());
    }
}
