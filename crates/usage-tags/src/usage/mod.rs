//! Usage-string parsing: scanning followed by finalization.

mod finalize;
mod scanner;
#[cfg(test)]
pub(crate) mod test_support;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::errors::UsageError;
use crate::format::{DEFAULT_SEPARATOR, format_tags};
use crate::tag::Tag;

/// Parse a usage string into its finalized tags.
///
/// # Errors
/// Returns [`UsageError`] when the brackets, colons, option separators or
/// rest markers are used incorrectly. No partial sequence is returned.
///
/// # Examples
/// ```
/// use usage_tags::parse;
/// let tags = parse("<name:string> [count:number...]").expect("usage should parse");
/// assert_eq!(tags.len(), 2);
/// assert!(tags[0].required);
/// assert!(tags[1].rest);
/// assert_eq!(tags[1].kind, "number");
/// ```
pub fn parse(input: &str) -> Result<Vec<Tag>, UsageError> {
    finalize::finalize(scanner::scan(input)?)
}

/// Parse a usage string supplied as raw bytes.
///
/// # Errors
/// Returns [`UsageError::InvalidInputType`] when `input` is not valid UTF-8,
/// otherwise fails as [`parse`] does.
///
/// # Examples
/// ```
/// use usage_tags::{UsageError, parse_bytes};
/// assert!(parse_bytes(b"<@user>").is_ok());
/// assert!(matches!(
///     parse_bytes(&[0xff, 0xfe]),
///     Err(UsageError::InvalidInputType(_))
/// ));
/// ```
pub fn parse_bytes(input: &[u8]) -> Result<Vec<Tag>, UsageError> {
    parse(std::str::from_utf8(input)?)
}

/// An owned, finalized sequence of usage tags.
///
/// `Display` renders the sequence with the default separator.
///
/// # Examples
/// ```
/// use usage_tags::Usage;
/// let usage: Usage = "<name : string> [ rest : string... ]"
///     .parse()
///     .expect("usage should parse");
/// assert_eq!(usage.to_string(), "<name> [rest...]");
/// assert_eq!(usage.rest_tag().map(|tag| tag.name.as_str()), Some("rest"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Usage {
    tags: Vec<Tag>,
}

impl Usage {
    /// Return the trailing variadic tag, if the sequence ends with one.
    #[must_use]
    pub fn rest_tag(&self) -> Option<&Tag> {
        self.tags.last().filter(|tag| tag.rest)
    }

    /// Render the sequence joined by `separator`.
    #[must_use]
    pub fn format_with(&self, separator: &str) -> String {
        format_tags(&self.tags, separator)
    }

    /// Consume the sequence, returning its tags.
    #[must_use]
    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }
}

impl FromStr for Usage {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|tags| Self { tags })
    }
}

impl TryFrom<&[u8]> for Usage {
    type Error = UsageError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        parse_bytes(value).map(|tags| Self { tags })
    }
}

impl Deref for Usage {
    type Target = [Tag];

    fn deref(&self) -> &Self::Target {
        &self.tags
    }
}

impl From<Usage> for Vec<Tag> {
    fn from(usage: Usage) -> Self {
        usage.tags
    }
}

impl IntoIterator for Usage {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a Usage {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(DEFAULT_SEPARATOR))
    }
}
