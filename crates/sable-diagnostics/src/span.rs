//! Source locations for configuration text

use serde::{Deserialize, Serialize};

/// A location in source text (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Byte offset from start of source
    pub offset: usize,
    /// Row number (0-indexed)
    pub row: usize,
    /// Column number (0-indexed, in characters not bytes)
    pub column: usize,
}

/// A range in source text from start to end
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Start location (inclusive)
    pub start: Location,
    /// End location (exclusive)
    pub end: Location,
}

/// A parsed value together with the source range it was read from.
///
/// The configuration parser attaches ranges where it can; values synthesized
/// elsewhere (command-line overrides, defaults) carry none. Diagnostics
/// about a value reuse its range so the host can point at the offending
/// text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    /// The parsed value
    pub value: T,
    /// Where the value was read from, when known
    pub range: Option<Range>,
}

impl<T> Spanned<T> {
    /// Wrap a value with no source range.
    pub fn new(value: T) -> Self {
        Self { value, range: None }
    }

    /// Wrap a value read from `range`.
    pub fn with_range(value: T, range: Range) -> Self {
        Self {
            value,
            range: Some(range),
        }
    }
}

impl From<&str> for Spanned<String> {
    fn from(value: &str) -> Self {
        Spanned::new(value.to_string())
    }
}

impl From<String> for Spanned<String> {
    fn from(value: String) -> Self {
        Spanned::new(value)
    }
}
