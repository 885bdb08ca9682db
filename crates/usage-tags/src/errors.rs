//! Error types shared by the scanner, finalizer and formatter.

use std::str::Utf8Error;
use thiserror::Error;

/// Errors surfaced while parsing a usage string into tags.
///
/// Every variant aborts the whole parse; no partial tag sequence is
/// returned alongside an error.
///
/// # Examples
/// ```
/// use usage_tags::{UsageError, parse};
/// let err = parse("<a|b>").unwrap_err();
/// assert_eq!(err, UsageError::MisplacedOptionSeparator { position: 2 });
/// assert_eq!(
///     err.to_string(),
///     "option separator '|' used outside the type field at character 2 (zero-based)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The input was not valid UTF-8 text.
    #[error("usage input must be valid UTF-8 text")]
    InvalidInputType(#[source] Utf8Error),
    /// An optional tag was opened while the current tag was already required.
    #[error(
        "cannot open an optional tag inside a required tag at character {position} (zero-based)"
    )]
    MalformedBracketNesting {
        /// Character offset of the offending `[`.
        position: usize,
    },
    /// A colon appeared after the type field had already started.
    #[error("colons can only be used once per tag at character {position} (zero-based)")]
    MalformedColonUsage {
        /// Character offset of the offending `:`.
        position: usize,
    },
    /// A `|` appeared while the name field was being read.
    #[error(
        "option separator '|' used outside the type field at character {position} (zero-based)"
    )]
    MisplacedOptionSeparator {
        /// Character offset of the offending `|`.
        position: usize,
    },
    /// A `...` type suffix was found on a tag other than the last one.
    #[error("rest arguments can only be used as the last argument (tag {index} of {count})")]
    MisplacedRestMarker {
        /// Zero-based index of the tag carrying the marker.
        index: usize,
        /// Number of tags in the sequence.
        count: usize,
    },
}

impl From<Utf8Error> for UsageError {
    fn from(err: Utf8Error) -> Self {
        Self::InvalidInputType(err)
    }
}
