//! Identifiers with an optional trailing object-key colon.

use crate::{is_horizontal_whitespace, is_word, Cursor};

/// A matched identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentMatch {
    /// Byte length of the identifier itself.
    pub ident_len: usize,
    /// Byte offset of the key colon, when the identifier is followed by
    /// horizontal whitespace and a single `:`.
    pub colon: Option<usize>,
    /// Total bytes matched, including whitespace and colon.
    pub len: usize,
}

/// Whether `b` may start an identifier: `$`, `_`, an ASCII letter, DEL, or
/// the first byte of any non-ASCII character.
#[inline]
const fn is_ident_start(b: u8) -> bool {
    b == b'$' || b == b'_' || b.is_ascii_alphabetic() || b >= 0x7F
}

#[inline]
const fn is_ident_continue(b: u8) -> bool {
    b == b'$' || is_word(b) || b >= 0x7F
}

/// Match an identifier at the start of `chunk`.
///
/// A colon directly following `::` is not a key colon, so `a::b` matches
/// only `a`.
pub fn identifier(chunk: &str) -> Option<IdentMatch> {
    let mut cursor = Cursor::new(chunk);
    if !cursor.eat_if(is_ident_start) {
        return None;
    }
    // Non-ASCII bytes are all >= 0x80, so continuation bytes of a multibyte
    // character are accepted here too and the match ends on a boundary.
    cursor.eat_while(is_ident_continue);
    let ident_len = cursor.pos();

    cursor.eat_while(is_horizontal_whitespace);
    if cursor.current() == b':' && cursor.peek() != b':' {
        let colon = cursor.pos();
        cursor.advance();
        return Some(IdentMatch {
            ident_len,
            colon: Some(colon),
            len: cursor.pos(),
        });
    }

    Some(IdentMatch {
        ident_len,
        colon: None,
        len: ident_len,
    })
}

#[cfg(test)]
mod tests;
