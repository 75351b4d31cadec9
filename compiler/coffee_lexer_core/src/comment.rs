//! Block (`###`) and line (`#`) comments.

use std::ops::Range;

use memchr::memmem;

use crate::{is_horizontal_whitespace, is_whitespace, Cursor};

/// A matched comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comment {
    /// `###` body `###`, plus trailing horizontal whitespace.
    Block { len: usize, body: Range<usize> },
    /// One or more consecutive `#` comment lines, including the whitespace
    /// and blank lines before each. Never includes the final newline.
    Line { len: usize },
}

/// Whether `chunk` opens a block comment: `###` followed by a non-`#`.
///
/// An opener without a matching closer is not a comment of either kind.
pub fn starts_block_comment(chunk: &str) -> bool {
    let bytes = chunk.as_bytes();
    chunk.starts_with("###") && bytes.len() > 3 && bytes[3] != b'#'
}

/// Match a comment at the start of `chunk`.
pub fn comment(chunk: &str) -> Option<Comment> {
    if starts_block_comment(chunk) {
        if let Some(block) = block_comment(chunk) {
            return Some(block);
        }
    }
    line_comments(chunk)
}

fn block_comment(chunk: &str) -> Option<Comment> {
    // The body holds at least one character, so the closer is searched for
    // after it.
    let body_start = 3;
    let first_len = chunk[body_start..].chars().next()?.len_utf8();
    let search_from = body_start + first_len;
    let close = search_from + memmem::find(chunk[search_from..].as_bytes(), b"###")?;

    let mut cursor = Cursor::new(chunk);
    cursor.reset(close + 3);
    cursor.eat_while(is_horizontal_whitespace);
    Some(Comment::Block {
        len: cursor.pos(),
        body: body_start..close,
    })
}

fn line_comments(chunk: &str) -> Option<Comment> {
    let mut cursor = Cursor::new(chunk);
    let mut matched = false;
    loop {
        let line_start = cursor.pos();
        cursor.eat_while(is_whitespace);
        if cursor.current() != b'#' || starts_block_comment(cursor.rest()) {
            cursor.reset(line_start);
            break;
        }
        cursor.eat_until_newline_or_eof();
        matched = true;
    }
    matched.then(|| Comment::Line { len: cursor.pos() })
}

#[cfg(test)]
mod tests;
