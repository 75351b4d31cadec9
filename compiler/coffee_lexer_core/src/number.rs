//! Numeric literals.
//!
//! Recognized forms, case-insensitively: `0b[01]+`, `0o[0-7]+`,
//! `0x[0-9a-f]+`, and decimal `\d*\.?\d+` with an optional `e[+-]?\d+`
//! exponent. Alternatives are tried in that order and the first that matches
//! wins, so `0b2` matches only `0`. Case checks (uppercase radix prefix or
//! exponent) are the scanner's job; this matcher accepts both cases.

use crate::Cursor;

/// Match a number at the start of `chunk`, returning its byte length.
pub fn number(chunk: &str) -> Option<usize> {
    radix(chunk, b'b', |b| matches!(b, b'0' | b'1'))
        .or_else(|| radix(chunk, b'o', |b| matches!(b, b'0'..=b'7')))
        .or_else(|| radix(chunk, b'x', |b| b.is_ascii_hexdigit()))
        .or_else(|| decimal(chunk))
}

fn radix(chunk: &str, marker: u8, digit: impl Fn(u8) -> bool) -> Option<usize> {
    let mut cursor = Cursor::new(chunk);
    if cursor.current() != b'0' || !cursor.peek().eq_ignore_ascii_case(&marker) {
        return None;
    }
    cursor.advance_n(2);
    match cursor.eat_while(digit) {
        0 => None,
        _ => Some(cursor.pos()),
    }
}

fn decimal(chunk: &str) -> Option<usize> {
    let mut cursor = Cursor::new(chunk);
    let integer = cursor.eat_while(|b| b.is_ascii_digit());
    if cursor.current() == b'.' && cursor.peek().is_ascii_digit() {
        cursor.advance();
        cursor.eat_while(|b| b.is_ascii_digit());
    } else if integer == 0 {
        return None;
    }

    // Optional exponent: only taken if it is complete.
    let mantissa_end = cursor.pos();
    if cursor.eat_if(|b| b == b'e' || b == b'E') {
        cursor.eat_if(|b| b == b'+' || b == b'-');
        if cursor.eat_while(|b| b.is_ascii_digit()) == 0 {
            cursor.reset(mantissa_end);
        }
    }
    Some(cursor.pos())
}
