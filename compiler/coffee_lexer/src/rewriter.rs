//! Rewriter: raw tokens to the token stream the grammar expects.
//!
//! The language allows parentheses, braces and block indentation to be
//! left out in many places. The rewriter runs a fixed sequence of passes
//! over the raw token list that make the omitted structure explicit:
//!
//! 1. drop leading `TERMINATOR`s
//! 2. retag the closers of calls as `CALL_END`
//! 3. retag the closers of indexes as `INDEX_END`
//! 4. wrap single-line bodies in generated `INDENT`/`OUTDENT` pairs
//! 5. retag trailing `if`s as `POST_IF`
//! 6. insert implicit call parentheses and object braces
//! 7. give every generated token a location
//!
//! Passes never fail. The scanner has already balanced every explicit
//! bracket, but some inputs it accepts (`@ switch`, `():`) defeat the
//! implicit-call and implicit-object passes; `check_nesting` rejects
//! those afterwards.

mod implicit;
mod normalize;

use coffee_ir::{Span, Tag, Token};

use crate::categories::{EXPRESSION_END, EXPRESSION_START};
use crate::lex_error::{LexError, LexErrorKind};

/// Token list being rewritten.
pub(crate) struct Rewriter {
    tokens: Vec<Token>,
}

impl Rewriter {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Rewriter { tokens }
    }

    /// Run every pass in order.
    pub(crate) fn rewrite(mut self) -> Vec<Token> {
        self.remove_leading_newlines();
        self.close_open_calls();
        self.close_open_indexes();
        self.normalize_lines();
        self.tag_postfix_conditionals();
        self.add_implicit_braces_and_parens();
        self.add_location_data();
        self.tokens
    }

    fn remove_leading_newlines(&mut self) {
        let leading = self
            .tokens
            .iter()
            .take_while(|token| token.is(Tag::Terminator))
            .count();
        self.tokens.drain(..leading);
        tracing::debug!(tokens = self.tokens.len(), "removed leading newlines");
    }

    /// The closer of each `CALL_START` becomes `CALL_END`.
    ///
    /// A block argument ends in `) OUTDENT`; the `)` is retagged there.
    fn close_open_calls(&mut self) {
        let mut i = 0;
        while i < self.tokens.len() {
            if self.tokens[i].is(Tag::CallStart) {
                detect_end(
                    &mut self.tokens,
                    i + 1,
                    |tokens, j| match tokens[j].tag {
                        Tag::RParen | Tag::CallEnd => true,
                        Tag::Outdent => tag_before(tokens, j) == Some(Tag::RParen),
                        _ => false,
                    },
                    |tokens, token, at| {
                        let index = if tokens[token].is(Tag::Outdent) {
                            at.saturating_sub(1)
                        } else {
                            at
                        };
                        tokens[index].tag = Tag::CallEnd;
                    },
                );
            }
            i += 1;
        }
        tracing::debug!(tokens = self.tokens.len(), "closed open calls");
    }

    /// The closer of each `INDEX_START` becomes `INDEX_END`.
    fn close_open_indexes(&mut self) {
        let mut i = 0;
        while i < self.tokens.len() {
            if self.tokens[i].is(Tag::IndexStart) {
                detect_end(
                    &mut self.tokens,
                    i + 1,
                    |tokens, j| matches!(tokens[j].tag, Tag::RBracket | Tag::IndexEnd),
                    |tokens, token, _| tokens[token].tag = Tag::IndexEnd,
                );
            }
            i += 1;
        }
        tracing::debug!(tokens = self.tokens.len(), "closed open indexes");
    }

    /// Give each token without a location a zero-width one.
    ///
    /// A generated `{` sits at the start of the token after it; anything
    /// else sits at the end of the token before it.
    fn add_location_data(&mut self) {
        for i in 0..self.tokens.len() {
            if self.tokens[i].has_location() {
                continue;
            }
            let next = self.tokens.get(i + 1).and_then(|token| token.span);
            let prev = i
                .checked_sub(1)
                .and_then(|p| self.tokens.get(p))
                .and_then(|token| token.span);
            let span = match (self.tokens[i].tag, next, prev) {
                (Tag::LBrace, Some(next), _) => next.start(),
                (_, _, Some(prev)) => prev.end(),
                _ => Span::DUMMY,
            };
            self.tokens[i].span = Some(span);
        }
        tracing::debug!(tokens = self.tokens.len(), "added location data");
    }
}

/// Scan forward from `start` for the end of the current expression.
///
/// Brackets opened along the way are skipped as a unit. The scan stops at
/// the first token at depth zero that satisfies `condition`, or at the
/// closer of an enclosing bracket, and calls `action(tokens, token, at)`:
///
/// - on a match, `token` and `at` are both the matching index;
/// - on leaving the enclosing bracket, `token` is the index after that
///   closer and `at` the index of the closer itself.
///
/// Nothing is called if the list ends first.
fn detect_end<C, A>(tokens: &mut Vec<Token>, start: usize, condition: C, action: A)
where
    C: Fn(&[Token], usize) -> bool,
    A: FnOnce(&mut Vec<Token>, usize, usize),
{
    let mut levels = 0isize;
    let mut i = start;
    while i < tokens.len() {
        if levels == 0 && condition(tokens, i) {
            action(tokens, i, i);
            return;
        }
        if levels < 0 {
            action(tokens, i, i - 1);
            return;
        }
        let tag = tokens[i].tag;
        if EXPRESSION_START.contains(tag) {
            levels += 1;
        } else if EXPRESSION_END.contains(tag) {
            levels -= 1;
        }
        i += 1;
    }
}

/// Check that every opener in a rewritten list is closed by its own closer.
///
/// A closer that does not match the innermost open bracket is reported as
/// unmatched at the closer; a bracket left open is reported as missing its
/// closer at the opener.
pub(crate) fn check_nesting(tokens: &[Token]) -> Result<(), LexError> {
    let location = |token: &Token| token.span.unwrap_or(Span::DUMMY);
    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        if token.tag.is_opener() {
            open.push(token);
        } else if token.tag.is_closer() {
            let closes = open.pop().and_then(|opener| opener.tag.inverse());
            if closes != Some(token.tag) {
                tracing::debug!(tag = %token.tag, ?closes, "unbalanced rewrite");
                return Err(LexError::at(
                    LexErrorKind::Unmatched { tag: token.tag },
                    location(token),
                ));
            }
        }
    }
    match open.last().copied() {
        Some(opener) => {
            let tag = opener.tag.inverse().unwrap_or(opener.tag);
            tracing::debug!(%tag, "unclosed after rewrite");
            Err(LexError::at(LexErrorKind::Missing { tag }, location(opener)))
        }
        None => Ok(()),
    }
}

#[inline]
fn tag_at(tokens: &[Token], i: usize) -> Option<Tag> {
    tokens.get(i).map(|token| token.tag)
}

#[inline]
fn tag_before(tokens: &[Token], i: usize) -> Option<Tag> {
    i.checked_sub(1).and_then(|p| tag_at(tokens, p))
}
