//! Single-pass character scanner turning usage text into raw tags.

use crate::errors::UsageError;
use crate::tag::{LITERAL_TYPE, MEMBER_TYPE, Tag, USER_TYPE};

/// Scan `input` into tags whose rest markers and options are still unresolved.
///
/// Spaces are dropped wherever they occur. A tag left open at the end of the
/// input is discarded.
pub(crate) fn scan(input: &str) -> Result<Vec<Tag>, UsageError> {
    let mut scanner = Scanner::default();
    for (position, ch) in input.chars().enumerate() {
        scanner.feed(position, ch)?;
    }
    Ok(scanner.finish())
}

#[derive(Debug, Default)]
struct Scanner {
    tags: Vec<Tag>,
    current: Tag,
    in_type: bool,
    colon_armed: bool,
}

impl Scanner {
    fn feed(&mut self, position: usize, ch: char) -> Result<(), UsageError> {
        if ch == ' ' {
            return Ok(());
        }
        // Brackets leave a pending colon armed across tag boundaries.
        if !matches!(ch, ':' | '<' | '>' | '[' | ']') {
            self.colon_armed = false;
        }

        match ch {
            '<' => self.current.required = true,
            '[' => {
                if self.current.required {
                    return Err(UsageError::MalformedBracketNesting { position });
                }
            }
            '>' | ']' => self.close(),
            ':' => self.colon(position)?,
            '|' => self.separator(position)?,
            _ => {
                if self.in_type {
                    self.current.kind.push(ch);
                } else {
                    self.current.name.push(ch);
                }
            }
        }
        Ok(())
    }

    fn colon(&mut self, position: usize) -> Result<(), UsageError> {
        if self.colon_armed {
            // `::` marks the tag for literal display.
            self.colon_armed = false;
            self.current.literal = true;
            return Ok(());
        }
        if self.in_type {
            return Err(UsageError::MalformedColonUsage { position });
        }
        self.in_type = true;
        self.colon_armed = true;
        Ok(())
    }

    fn separator(&mut self, position: usize) -> Result<(), UsageError> {
        if !self.in_type {
            return Err(UsageError::MisplacedOptionSeparator { position });
        }
        let alternative = std::mem::take(&mut self.current.kind);
        self.current
            .options
            .get_or_insert_with(Vec::new)
            .push(alternative);
        Ok(())
    }

    fn close(&mut self) {
        let mut tag = std::mem::take(&mut self.current);
        classify(&mut tag);
        log::trace!("scanned usage tag {tag:?}");
        self.tags.push(tag);
        self.in_type = false;
    }

    fn finish(self) -> Vec<Tag> {
        if self.in_type || self.current != Tag::default() {
            log::debug!("discarding unterminated usage tag {:?}", self.current);
        }
        self.tags
    }
}

/// Assign a type to a tag that closed without one.
fn classify(tag: &mut Tag) {
    if !tag.kind.is_empty() {
        return;
    }
    if tag.name.starts_with("@@") {
        tag.name.replace_range(..2, "");
        tag.kind.push_str(MEMBER_TYPE);
    } else if tag.name.starts_with('@') {
        tag.name.replace_range(..1, "");
        tag.kind.push_str(USER_TYPE);
    } else {
        tag.kind.push_str(LITERAL_TYPE);
    }
}
