//! Test helpers for asserting usage parser outcomes.
use super::parse;
use crate::errors::UsageError;
use crate::tag::Tag;

pub(crate) fn parse_ok(input: &str) -> Vec<Tag> {
    match parse(input) {
        Ok(tags) => tags,
        Err(err) => panic!("usage should parse: {err}"),
    }
}

pub(crate) fn parse_err(input: &str) -> UsageError {
    match parse(input) {
        Ok(tags) => panic!("usage parsing should fail, got {tags:?}"),
        Err(err) => err,
    }
}
