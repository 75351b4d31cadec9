//! Whitespace, line breaks and line continuation.

use crate::{is_horizontal_whitespace, is_whitespace, Cursor};

/// Length of the horizontal whitespace run at the start of `chunk`.
pub fn whitespace(chunk: &str) -> usize {
    Cursor::new(chunk).eat_while(is_horizontal_whitespace)
}

/// Length of the run of newlines (each followed by its indentation) at the
/// start of `chunk`.
///
/// The indentation of the last line is `len - 1 - last_newline_offset`.
pub fn multi_dent(chunk: &str) -> usize {
    let mut cursor = Cursor::new(chunk);
    while cursor.eat("\n") {
        cursor.eat_while(is_horizontal_whitespace);
    }
    cursor.pos()
}

/// Whether the next line continues the current expression: after optional
/// whitespace, a `,`, a `.` or `?.` that is not part of a range or a number,
/// or `::`.
pub fn line_continuer(chunk: &str) -> bool {
    let mut cursor = Cursor::new(chunk);
    cursor.eat_while(is_whitespace);
    match cursor.current() {
        b',' => true,
        b':' => cursor.peek() == b':',
        b'?' => cursor.peek() == b'.' && !matches!(cursor.nth(2), b'.' | b'0'..=b'9'),
        b'.' => !matches!(cursor.peek(), b'.' | b'0'..=b'9'),
        _ => false,
    }
}
