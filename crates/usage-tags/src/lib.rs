//! Parsing and formatting for command usage tags.
//!
//! A usage string such as `<name:string> [count:number...]` documents the
//! arguments a command accepts. [`parse`] turns it into a sequence of
//! [`Tag`] descriptors and [`format`] renders tags back into a compact
//! display form.

mod errors;
mod format;
mod tag;
mod usage;

pub use errors::UsageError;
pub use format::{DEFAULT_SEPARATOR, UsageInput, format, format_tags, format_with};
pub use tag::{LITERAL_TYPE, MEMBER_TYPE, OPTIONS_TYPE, REST_MARKER, Tag, USER_TYPE};
pub use usage::{Usage, parse, parse_bytes};

/// Version of this crate, taken from the package metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
