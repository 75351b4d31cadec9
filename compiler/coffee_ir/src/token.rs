//! Token types for the Coffee lexer.
//!
//! A [`Token`] is the unit of lexer output: a [`Tag`], the literal text it
//! was created from, an optional [`Span`], and [`TokenFlags`]. Tokens
//! synthesized by the rewriter start without a span and get one during the
//! final location pass.

mod flags;
mod set;
mod tag;

pub use flags::TokenFlags;
pub use set::TagSet;
pub use tag::Tag;

use std::fmt;

use super::Span;

/// A token with its location in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub tag: Tag,
    pub value: String,
    pub span: Option<Span>,
    pub flags: TokenFlags,
    /// Span of the token whose processing caused this one to be synthesized.
    ///
    /// Informational only; it never takes part in bracket matching.
    pub origin: Option<Span>,
}

impl Token {
    /// Create a source token.
    #[inline]
    pub fn new(tag: Tag, value: impl Into<String>, span: Span) -> Self {
        Token {
            tag,
            value: value.into(),
            span: Some(span),
            flags: TokenFlags::empty(),
            origin: None,
        }
    }

    /// Create a token standing in for implicit syntax.
    pub fn generated(tag: Tag, value: impl Into<String>, origin: Option<Span>) -> Self {
        Token {
            tag,
            value: value.into(),
            span: None,
            flags: TokenFlags::GENERATED,
            origin,
        }
    }

    /// Create a token that normalizes a single-line construct.
    pub fn explicit(tag: Tag, value: impl Into<String>) -> Self {
        Token {
            tag,
            value: value.into(),
            span: None,
            flags: TokenFlags::EXPLICIT,
            origin: None,
        }
    }

    /// Create a token with a dummy span, for tests and tooling.
    pub fn dummy(tag: Tag, value: impl Into<String>) -> Self {
        Token::new(tag, value, Span::DUMMY)
    }

    #[inline]
    pub fn is(&self, tag: Tag) -> bool {
        self.tag == tag
    }

    #[inline]
    pub fn spaced(&self) -> bool {
        self.flags.contains(TokenFlags::SPACED)
    }

    #[inline]
    pub fn new_line(&self) -> bool {
        self.flags.contains(TokenFlags::NEW_LINE)
    }

    #[inline]
    pub fn is_generated(&self) -> bool {
        self.flags.contains(TokenFlags::GENERATED)
    }

    #[inline]
    pub fn is_explicit(&self) -> bool {
        self.flags.contains(TokenFlags::EXPLICIT)
    }

    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.flags.contains(TokenFlags::RESERVED)
    }

    #[inline]
    pub fn string_end(&self) -> bool {
        self.flags.contains(TokenFlags::STRING_END)
    }

    #[inline]
    pub fn from_then(&self) -> bool {
        self.flags.contains(TokenFlags::FROM_THEN)
    }

    /// Whether the token carries a source location.
    #[inline]
    pub fn has_location(&self) -> bool {
        self.span.is_some()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.tag, self.value)?;
        if let Some(span) = self.span {
            write!(f, " @ {span:?}")?;
        }
        if !self.flags.is_empty() {
            write!(f, " {:?}", self.flags)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
