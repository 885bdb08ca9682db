//! Second pass resolving rest markers and option lists on scanned tags.

use crate::errors::UsageError;
use crate::tag::{OPTIONS_TYPE, REST_MARKER, Tag};

/// Resolve rest markers and option lists across a scanned tag sequence.
///
/// The rest marker is resolved before the option list, so the marker may
/// trail the final alternative of an options tag.
pub(crate) fn finalize(mut tags: Vec<Tag>) -> Result<Vec<Tag>, UsageError> {
    let count = tags.len();
    for (index, tag) in tags.iter_mut().enumerate() {
        resolve_rest(tag, index, count)?;
        resolve_options(tag);
    }
    Ok(tags)
}

fn resolve_rest(tag: &mut Tag, index: usize, count: usize) -> Result<(), UsageError> {
    let Some(len) = tag.kind.strip_suffix(REST_MARKER).map(str::len) else {
        return Ok(());
    };
    if index + 1 != count {
        return Err(UsageError::MisplacedRestMarker { index, count });
    }
    tag.kind.truncate(len);
    tag.rest = true;
    log::trace!("resolved rest tag `{}`", tag.name);
    Ok(())
}

fn resolve_options(tag: &mut Tag) {
    if let Some(options) = tag.options.as_mut() {
        options.push(std::mem::replace(&mut tag.kind, OPTIONS_TYPE.to_owned()));
        log::trace!("resolved options tag `{}` with {options:?}", tag.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, kind: &str) -> Tag {
        Tag {
            name: name.into(),
            kind: kind.into(),
            ..Tag::default()
        }
    }

    fn finalize_ok(tags: Vec<Tag>) -> Vec<Tag> {
        match finalize(tags) {
            Ok(tags) => tags,
            Err(err) => panic!("tags should finalize: {err}"),
        }
    }

    #[test]
    fn marks_last_tag_as_rest() {
        let tags = finalize_ok(vec![raw("a", "string"), raw("b", "number...")]);
        assert_eq!(
            tags,
            vec![
                raw("a", "string"),
                Tag {
                    rest: true,
                    ..raw("b", "number")
                },
            ]
        );
    }

    #[test]
    fn rejects_rest_marker_before_last_tag() {
        let result = finalize(vec![raw("a", "string..."), raw("b", "number")]);
        assert_eq!(
            result,
            Err(UsageError::MisplacedRestMarker { index: 0, count: 2 })
        );
    }

    #[test]
    fn appends_final_alternative_to_options() {
        let tag = Tag {
            options: Some(vec!["a".into(), "b".into()]),
            ..raw("n", "c")
        };
        let tags = finalize_ok(vec![tag]);
        let [tag] = tags.as_slice() else {
            panic!("expected exactly one tag, got {tags:?}");
        };
        assert_eq!(tag.kind, OPTIONS_TYPE);
        assert_eq!(
            tag.options,
            Some(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn strips_rest_marker_before_collecting_final_alternative() {
        let tag = Tag {
            options: Some(vec!["x".into()]),
            ..raw("a", "y...")
        };
        let tags = finalize_ok(vec![tag]);
        let [tag] = tags.as_slice() else {
            panic!("expected exactly one tag, got {tags:?}");
        };
        assert!(tag.rest);
        assert_eq!(tag.options, Some(vec!["x".into(), "y".into()]));
    }

    #[test]
    fn bare_rest_marker_leaves_empty_type() {
        let tags = finalize_ok(vec![raw("a", "...")]);
        let [tag] = tags.as_slice() else {
            panic!("expected exactly one tag, got {tags:?}");
        };
        assert!(tag.rest);
        assert!(tag.kind.is_empty());
    }

    #[test]
    fn accepts_empty_sequence() {
        assert!(finalize_ok(Vec::new()).is_empty());
    }
}
