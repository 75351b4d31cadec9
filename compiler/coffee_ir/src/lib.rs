//! Coffee IR - token data contract.
//!
//! This crate contains the types shared between the lexer and whatever
//! consumes its output (the grammar-driven parser, formatters, highlighters):
//! - [`Span`] for inclusive line/column source locations
//! - [`Tag`] for the closed set of token categories
//! - [`TagSet`] for compile-time category membership tests
//! - [`TokenFlags`] for per-token layout and provenance bits
//! - [`Token`] itself
//!
//! The representation is a stable contract. Spans and flags are the only
//! location and layout data; there is no back-reference from a token to
//! the token list it lives in.

mod span;
mod token;

pub use span::Span;
pub use token::{Tag, TagSet, Token, TokenFlags};
