//! Tag categories shared by the scanner and the rewriter.
//!
//! Every category is a `const` [`TagSet`], so membership is a single bit
//! test and a misspelled tag fails to compile.

use coffee_ir::{Tag, TagSet};

// === Scanner categories ===

/// Tokens after which an unspaced `(` opens a call.
pub(crate) const CALLABLE: TagSet = TagSet::of(&[
    Tag::Identifier,
    Tag::String,
    Tag::Regex,
    Tag::RParen,
    Tag::RBracket,
    Tag::RBrace,
    Tag::Question,
    Tag::Prototype,
    Tag::At,
    Tag::This,
    Tag::Super,
]);

/// Tokens after which an unspaced `[` opens an index.
pub(crate) const INDEXABLE: TagSet = CALLABLE.union(TagSet::of(&[
    Tag::Number,
    Tag::Bool,
    Tag::Null,
    Tag::Undefined,
]));

/// Tokens after which a spaced `/` is division, never a regex.
pub(crate) const NOT_REGEX: TagSet = TagSet::of(&[
    Tag::Number,
    Tag::Regex,
    Tag::Bool,
    Tag::Null,
    Tag::Undefined,
    Tag::Increment,
    Tag::Decrement,
]);

/// Tokens after which an unspaced `/` is division.
pub(crate) const NOT_SPACED_REGEX: TagSet = NOT_REGEX.union(TagSet::of(&[
    Tag::RParen,
    Tag::RBrace,
    Tag::This,
    Tag::Identifier,
    Tag::String,
    Tag::RBracket,
]));

/// Tokens that leave an expression open across a newline.
pub(crate) const UNFINISHED: TagSet = TagSet::of(&[
    Tag::Backslash,
    Tag::Dot,
    Tag::SoakAccess,
    Tag::SoakPrototype,
    Tag::Unary,
    Tag::Math,
    Tag::UnaryMath,
    Tag::Plus,
    Tag::Minus,
    Tag::Power,
    Tag::Shift,
    Tag::Relation,
    Tag::Compare,
    Tag::Logic,
    Tag::Throw,
    Tag::Extends,
]);

/// Member-access operators. A word directly after one is a property name,
/// and a new line starting with one continues the previous call.
pub(crate) const MEMBER_ACCESS: TagSet = TagSet::of(&[
    Tag::Dot,
    Tag::SoakAccess,
    Tag::Prototype,
    Tag::SoakPrototype,
]);

/// Structurally significant line breaks.
pub(crate) const LINE_BREAK: TagSet = TagSet::of(&[Tag::Indent, Tag::Outdent, Tag::Terminator]);

// === Rewriter categories ===

/// Tags that open a balanced pair.
pub(crate) const EXPRESSION_START: TagSet = TagSet::of(&[
    Tag::LParen,
    Tag::LBracket,
    Tag::LBrace,
    Tag::Indent,
    Tag::CallStart,
    Tag::ParamStart,
    Tag::IndexStart,
]);

/// Tags that close a balanced pair.
pub(crate) const EXPRESSION_END: TagSet = TagSet::of(&[
    Tag::RParen,
    Tag::RBracket,
    Tag::RBrace,
    Tag::Outdent,
    Tag::CallEnd,
    Tag::ParamEnd,
    Tag::IndexEnd,
]);

/// Tokens that make a directly preceding line break redundant.
pub(crate) const EXPRESSION_CLOSE: TagSet =
    EXPRESSION_END.union(TagSet::of(&[Tag::Catch, Tag::Then, Tag::Else, Tag::Finally]));

/// Tokens that, followed by an argument, begin an implicit call.
pub(crate) const IMPLICIT_FUNC: TagSet = TagSet::of(&[
    Tag::Identifier,
    Tag::Super,
    Tag::RParen,
    Tag::CallEnd,
    Tag::RBracket,
    Tag::IndexEnd,
    Tag::At,
    Tag::This,
]);

/// Tokens that can start the first argument of an implicit call.
pub(crate) const IMPLICIT_CALL: TagSet = TagSet::of(&[
    Tag::Identifier,
    Tag::Number,
    Tag::String,
    Tag::Js,
    Tag::Regex,
    Tag::ParamStart,
    Tag::Class,
    Tag::If,
    Tag::Try,
    Tag::Switch,
    Tag::This,
    Tag::Bool,
    Tag::Null,
    Tag::Undefined,
    Tag::Unary,
    Tag::UnaryMath,
    Tag::Super,
    Tag::Throw,
    Tag::At,
    Tag::Arrow,
    Tag::FatArrow,
    Tag::LBracket,
    Tag::LParen,
    Tag::LBrace,
    Tag::Decrement,
    Tag::Increment,
]);

/// Sign operators that start an argument when glued to their operand.
pub(crate) const IMPLICIT_UNSPACED_CALL: TagSet = TagSet::of(&[Tag::Plus, Tag::Minus]);

/// Tokens that always end an implicit call.
pub(crate) const IMPLICIT_END: TagSet = TagSet::of(&[
    Tag::PostIf,
    Tag::For,
    Tag::While,
    Tag::Until,
    Tag::When,
    Tag::By,
    Tag::Loop,
    Tag::Terminator,
]);

/// Control keywords whose header may hold an implicit call.
pub(crate) const IMPLICIT_CONTROL: TagSet = TagSet::of(&[
    Tag::If,
    Tag::Try,
    Tag::Finally,
    Tag::Catch,
    Tag::Class,
    Tag::Switch,
]);

/// Tokens after which an `INDENT` continues the current implicit call.
pub(crate) const INDENT_CONTINUES_CALL: TagSet = TagSet::of(&[
    Tag::FatArrow,
    Tag::Arrow,
    Tag::LBracket,
    Tag::LParen,
    Tag::Comma,
    Tag::LBrace,
    Tag::Try,
    Tag::Else,
    Tag::Assign,
]);

/// Clause keywords whose header an indented object never belongs to.
pub(crate) const CLAUSE_HEADERS: TagSet = TagSet::of(&[
    Tag::Class,
    Tag::Extends,
    Tag::If,
    Tag::Catch,
    Tag::Switch,
    Tag::LeadingWhen,
    Tag::For,
    Tag::While,
    Tag::Until,
]);

/// Tokens that may be followed by a single-line body.
pub(crate) const SINGLE_LINERS: TagSet = TagSet::of(&[
    Tag::Else,
    Tag::Arrow,
    Tag::FatArrow,
    Tag::Try,
    Tag::Finally,
    Tag::Then,
]);

/// Tokens that end a single-line body.
pub(crate) const SINGLE_CLOSERS: TagSet = TagSet::of(&[
    Tag::Terminator,
    Tag::Catch,
    Tag::Finally,
    Tag::Else,
    Tag::Outdent,
    Tag::LeadingWhen,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sets_extend_their_base() {
        assert!(INDEXABLE.contains(Tag::Identifier));
        assert!(INDEXABLE.contains(Tag::Number));
        assert!(!CALLABLE.contains(Tag::Number));
        assert!(NOT_SPACED_REGEX.contains(Tag::Increment));
        assert!(NOT_SPACED_REGEX.contains(Tag::Identifier));
        assert!(!NOT_REGEX.contains(Tag::Identifier));
        assert!(EXPRESSION_CLOSE.contains(Tag::Outdent));
        assert!(EXPRESSION_CLOSE.contains(Tag::Then));
    }

    #[test]
    fn pair_sets_are_inverse() {
        for tag in [
            Tag::LParen,
            Tag::LBracket,
            Tag::LBrace,
            Tag::Indent,
            Tag::CallStart,
            Tag::ParamStart,
            Tag::IndexStart,
        ] {
            assert!(EXPRESSION_START.contains(tag));
            assert!(tag.inverse().is_some_and(|end| EXPRESSION_END.contains(end)));
        }
        assert_eq!(EXPRESSION_START.len(), EXPRESSION_END.len());
    }
}
