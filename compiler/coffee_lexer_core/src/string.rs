//! Quoted literals: single-line strings, heredocs and embedded JavaScript.
//!
//! All three allow a backslash to escape the following character. Strings
//! and heredocs may span lines; embedded JavaScript may not escape a newline.

use crate::{is_horizontal_whitespace, Cursor};

/// Match a `'...'` or `"..."` string, returning its byte length.
///
/// Returns `None` if the chunk does not start with a quote or the string is
/// unterminated.
pub fn simple_string(chunk: &str) -> Option<usize> {
    let mut cursor = Cursor::new(chunk);
    let quote = cursor.current();
    if quote != b'\'' && quote != b'"' {
        return None;
    }
    cursor.advance();
    delimited(&mut cursor, quote, true)
}

/// Match a backtick-delimited JavaScript literal, returning its byte length.
pub fn js(chunk: &str) -> Option<usize> {
    let mut cursor = Cursor::new(chunk);
    if !cursor.eat("`") {
        return None;
    }
    delimited(&mut cursor, b'`', false)
}

/// Scan to the closing `quote`, honoring backslash escapes.
fn delimited(cursor: &mut Cursor<'_>, quote: u8, escape_newline: bool) -> Option<usize> {
    loop {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b if b == quote => {
                cursor.advance();
                return Some(cursor.pos());
            }
            b'\\' => {
                cursor.advance();
                if cursor.is_eof() || (!escape_newline && cursor.current() == b'\n') {
                    return None;
                }
                cursor.advance_char();
            }
            _ => cursor.advance_char(),
        }
    }
}

/// Match a `"""` or `'''` heredoc, returning its byte length.
///
/// The body is the shortest run of (possibly escaped) characters followed
/// by the closing delimiter, optionally preceded by a newline and
/// indentation.
pub fn heredoc(chunk: &str) -> Option<usize> {
    let delimiter = if chunk.starts_with("\"\"\"") {
        "\"\"\""
    } else if chunk.starts_with("'''") {
        "'''"
    } else {
        return None;
    };

    let mut cursor = Cursor::new(chunk);
    cursor.advance_n(3);
    loop {
        if let Some(len) = closes_heredoc(cursor, delimiter) {
            return Some(len);
        }
        if cursor.is_eof() {
            return None;
        }
        if cursor.current() == b'\\' {
            cursor.advance();
            if cursor.is_eof() {
                return None;
            }
        }
        cursor.advance_char();
    }
}

/// Try `(?:\n[^\n\S]*)?` followed by the delimiter at the cursor.
fn closes_heredoc(mut cursor: Cursor<'_>, delimiter: &str) -> Option<usize> {
    let here = cursor.pos();
    if cursor.eat("\n") {
        cursor.eat_while(is_horizontal_whitespace);
        if cursor.eat(delimiter) {
            return Some(cursor.pos());
        }
        cursor.reset(here);
    }
    if cursor.eat(delimiter) {
        Some(cursor.pos())
    } else {
        None
    }
}
