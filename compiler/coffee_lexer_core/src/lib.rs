//! Coffee lexer core - anchored pattern matchers.
//!
//! Every matcher in this crate answers one question about the *start* of a
//! string slice: does a given lexical form begin here, and if so, how many
//! bytes does it span? Matchers never allocate and never look behind the
//! slice they are given.
//!
//! The scanner in `coffee_lexer` feeds each matcher the unconsumed rest of
//! the source (its "chunk") in a fixed priority order. The matchers
//! reproduce the leftmost-first semantics of the lexical grammar's regular
//! expressions, including the cases that need lookahead or a backreference,
//! without a regex engine.
//!
//! # Character classes
//!
//! "Whitespace" follows the JavaScript-flavored `\s` of the grammar: space,
//! tab, newline, vertical tab, form feed and carriage return. "Horizontal
//! whitespace" is the same set minus newline. "Word" bytes are ASCII
//! alphanumerics and `_`.

mod comment;
mod cursor;
mod ident;
mod layout;
mod number;
mod operator;
mod regex;
mod string;

pub use comment::{comment, starts_block_comment, Comment};
pub use cursor::Cursor;
pub use ident::{identifier, IdentMatch};
pub use layout::{line_continuer, multi_dent, whitespace};
pub use number::number;
pub use operator::operator;
pub use regex::{heregex, regex, RegexMatch};
pub use string::{heredoc, js, simple_string};

/// `\s`: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// `[^\n\S]`: whitespace other than newline.
#[inline]
pub const fn is_horizontal_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C | b'\r')
}

/// `\w`: ASCII letters, digits and underscore.
#[inline]
pub const fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
