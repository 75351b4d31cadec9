//! Lexer for Coffee: source text to the token stream the grammar expects.
//!
//! Lexing runs in two stages:
//!
//! - the [scanner](scan) turns source text into raw tokens, tracking
//!   indentation and bracket balance and rejecting malformed input;
//! - the [rewriter](rewrite) makes implicit syntax explicit: call
//!   parentheses, object braces and single-line blocks.
//!
//! [`tokenize`] runs both. Errors stop lexing at the first problem found;
//! there is no recovery.

mod categories;
mod keywords;
mod lex_error;
mod rewriter;
mod scanner;

pub use coffee_ir::{Span, Tag, TagSet, Token, TokenFlags};
pub use lex_error::{LexError, LexErrorKind};

use rewriter::{check_nesting, Rewriter};
use scanner::Scanner;

/// Lex source text into the final token stream.
///
/// Every returned token has a span, and every opener is closed by its
/// matching closer.
///
/// # Errors
///
/// Returns the first [`LexError`] the scanner finds, or an
/// [`Unmatched`](LexErrorKind::Unmatched) or
/// [`Missing`](LexErrorKind::Missing) error when the implicit syntax
/// cannot be made explicit with balanced brackets.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Scanner::new(source).run()?;
    let tokens = Rewriter::new(tokens).rewrite();
    check_nesting(&tokens)?;
    Ok(tokens)
}

/// Scan source text into raw tokens, without rewriting.
///
/// # Errors
///
/// Returns the first [`LexError`] found.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::new(source).run()
}

/// Rewrite a raw token list as produced by [`scan`].
///
/// Unlike [`tokenize`], the result is not checked for balance.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn rewrite(tokens: Vec<Token>) -> Vec<Token> {
    Rewriter::new(tokens).rewrite()
}
