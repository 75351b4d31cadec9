//! Regular expression literals: `/.../flags` and `///.../// flags`.

use std::ops::Range;

use crate::{is_whitespace, is_word, Cursor};

/// A matched regex literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegexMatch {
    /// Total bytes matched, including flags.
    pub len: usize,
    /// Byte range of the pattern between the delimiters.
    pub body: Range<usize>,
    /// Byte range of the flags.
    pub flags: Range<usize>,
}

/// Match `[imgy]{0,4}` not followed by a word character.
fn flags(cursor: &mut Cursor<'_>) -> Option<Range<usize>> {
    let start = cursor.pos();
    let mut taken = 0;
    while taken < 4 && cursor.eat_if(|b| matches!(b, b'i' | b'm' | b'g' | b'y')) {
        taken += 1;
    }
    if is_word(cursor.current()) {
        return None;
    }
    Some(start..cursor.pos())
}

/// Match a single-line regex literal.
///
/// The opening `/` may not be followed by whitespace or `=`. Inside the
/// body, a backslash escapes any character and a `[...]` class may contain
/// an unescaped `/`. A newline ends the attempt. `//` is matched here; the
/// scanner rejects it as a regex.
pub fn regex(chunk: &str) -> Option<RegexMatch> {
    let mut cursor = Cursor::new(chunk);
    if !cursor.eat("/") {
        return None;
    }
    if cursor.is_eof() || is_whitespace(cursor.current()) || cursor.current() == b'=' {
        return None;
    }

    let body_start = cursor.pos();
    loop {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b'/' => break,
            b'\n' => return None,
            b'\\' => escape(&mut cursor)?,
            b'[' => class(&mut cursor)?,
            _ => cursor.advance_char(),
        }
    }
    let body = body_start..cursor.pos();
    cursor.advance();

    let flags = flags(&mut cursor)?;
    Some(RegexMatch {
        len: cursor.pos(),
        body,
        flags,
    })
}

/// `\\[\s\S]`: a backslash and any following character.
fn escape(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.advance();
    if cursor.is_eof() {
        return None;
    }
    cursor.advance_char();
    Some(())
}

/// `\[[^\]\n\\]*(?:\\[\s\S][^\]\n\\]*)*]`
fn class(cursor: &mut Cursor<'_>) -> Option<()> {
    cursor.advance();
    loop {
        if cursor.is_eof() {
            return None;
        }
        match cursor.current() {
            b']' => {
                cursor.advance();
                return Some(());
            }
            b'\n' => return None,
            b'\\' => escape(cursor)?,
            _ => cursor.advance_char(),
        }
    }
}

/// Match a block regex `///body///flags`.
///
/// The body is a non-empty run of units, each a single character or a
/// backslash and the character it escapes, after which `///` and valid
/// flags follow; it may span lines. Shorter bodies win, and at each unit
/// the escape reading is tried before the plain one.
pub fn heregex(chunk: &str) -> Option<RegexMatch> {
    if !chunk.starts_with("///") {
        return None;
    }
    let body_start = 3;
    let mut visited = vec![false; chunk.len() + 1];
    let mut pending = Vec::new();
    push_units(chunk, body_start, &mut pending);

    while let Some(close) = pending.pop() {
        if std::mem::replace(&mut visited[close], true) {
            continue;
        }
        if chunk[close..].starts_with("///") {
            let mut cursor = Cursor::new(chunk);
            cursor.reset(close + 3);
            if let Some(flags) = flags(&mut cursor) {
                return Some(RegexMatch {
                    len: cursor.pos(),
                    body: body_start..close,
                    flags,
                });
            }
        }
        push_units(chunk, close, &mut pending);
    }
    None
}

/// Queue the ends of the units starting at `pos`, escape reading on top.
fn push_units(chunk: &str, pos: usize, pending: &mut Vec<usize>) {
    let mut chars = chunk[pos..].chars();
    let Some(first) = chars.next() else {
        return;
    };
    let plain = pos + first.len_utf8();
    pending.push(plain);
    if first == '\\' {
        if let Some(escaped) = chars.next() {
            pending.push(plain + escaped.len_utf8());
        }
    }
}

#[cfg(test)]
mod tests;
