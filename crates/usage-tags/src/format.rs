//! Render tag sequences back into display strings.
//!
//! Rendering is a lossy projection: a tag's type is never written back, so
//! `<name:string>` displays as `<name>`. Tags carrying the literal display
//! flag show their alternatives instead of their name.

use std::fmt::{self, Write as _};

use crate::errors::UsageError;
use crate::tag::{REST_MARKER, Tag};
use crate::usage::{Usage, parse};

/// Separator placed between rendered tags by [`format`].
pub const DEFAULT_SEPARATOR: &str = " ";

/// Input accepted by [`format`]: usage text or an already parsed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageInput<'a> {
    /// Usage text, parsed before rendering.
    Text(&'a str),
    /// Tags rendered as they are.
    Tags(&'a [Tag]),
}

impl<'a> From<&'a str> for UsageInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for UsageInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a [Tag]> for UsageInput<'a> {
    fn from(value: &'a [Tag]) -> Self {
        Self::Tags(value)
    }
}

impl<'a> From<&'a Vec<Tag>> for UsageInput<'a> {
    fn from(value: &'a Vec<Tag>) -> Self {
        Self::Tags(value)
    }
}

impl<'a> From<&'a Usage> for UsageInput<'a> {
    fn from(value: &'a Usage) -> Self {
        Self::Tags(value)
    }
}

/// Format usage text or tags, separating tags with a single space.
///
/// # Errors
/// Returns [`UsageError`] when given text that fails to parse.
///
/// # Examples
/// ```
/// use usage_tags::{format, parse};
/// assert_eq!(
///     format("<name:string> [count:number...]").expect("usage should format"),
///     "<name> [count...]"
/// );
/// let tags = parse("<name::a|b>").expect("usage should parse");
/// assert_eq!(format(&tags).expect("tags always format"), "<a|b>");
/// ```
pub fn format<'a>(input: impl Into<UsageInput<'a>>) -> Result<String, UsageError> {
    format_with(input, DEFAULT_SEPARATOR)
}

/// Format usage text or tags, separating tags with `separator`.
///
/// # Errors
/// Returns [`UsageError`] when given text that fails to parse.
///
/// # Examples
/// ```
/// use usage_tags::format_with;
/// assert_eq!(
///     format_with("<a> <b> [c]", ", ").expect("usage should format"),
///     "<a>, <b>, [c]"
/// );
/// ```
pub fn format_with<'a>(
    input: impl Into<UsageInput<'a>>,
    separator: &str,
) -> Result<String, UsageError> {
    match input.into() {
        UsageInput::Text(text) => Ok(format_tags(&parse(text)?, separator)),
        UsageInput::Tags(tags) => Ok(format_tags(tags, separator)),
    }
}

/// Render `tags` joined by `separator`.
#[must_use]
pub fn format_tags(tags: &[Tag], separator: &str) -> String {
    let mut out = String::new();
    for (index, tag) in tags.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{tag}");
    }
    out
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = self.brackets();
        f.write_char(open)?;
        match (self.literal, &self.options) {
            (true, Some(options)) => write_alternatives(f, options)?,
            _ => f.write_str(&self.name)?,
        }
        if self.rest {
            f.write_str(REST_MARKER)?;
        }
        f.write_char(close)
    }
}

fn write_alternatives(f: &mut fmt::Formatter<'_>, options: &[String]) -> fmt::Result {
    for (index, option) in options.iter().enumerate() {
        if index > 0 {
            f.write_char('|')?;
        }
        f.write_str(option)?;
    }
    Ok(())
}
