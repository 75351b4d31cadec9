//! Block normalization and postfix conditionals.

use coffee_ir::{Span, Tag, Token, TokenFlags};

use super::{detect_end, tag_at, tag_before, Rewriter};
use crate::categories::{EXPRESSION_CLOSE, MEMBER_ACCESS, SINGLE_CLOSERS, SINGLE_LINERS};

impl Rewriter {
    /// Give every block an `INDENT`/`OUTDENT` pair.
    ///
    /// `-> a`, `try a`, `else a` and `then a` get a generated pair around
    /// the rest of the line; `then` itself is dropped. Empty `catch` bodies
    /// and a `TERMINATOR` before `else` get an explicit empty pair.
    pub(super) fn normalize_lines(&mut self) {
        let mut i = 0;
        while i < self.tokens.len() {
            i += self.normalize_line(i);
        }
        tracing::debug!(tokens = self.tokens.len(), "normalized lines");
    }

    fn normalize_line(&mut self, i: usize) -> usize {
        let tag = self.tokens[i].tag;
        let next = tag_at(&self.tokens, i + 1);

        if tag == Tag::Terminator {
            if next == Some(Tag::Else) && tag_before(&self.tokens, i) != Some(Tag::Outdent) {
                let (indent, outdent) = explicit_pair();
                self.tokens[i] = indent;
                self.tokens.insert(i + 1, outdent);
                return 1;
            }
            if EXPRESSION_CLOSE.contains_opt(next) {
                self.tokens.remove(i);
                return 0;
            }
        }

        if tag == Tag::Catch {
            for k in 1..=2 {
                if matches!(
                    tag_at(&self.tokens, i + k),
                    Some(Tag::Outdent | Tag::Terminator | Tag::Finally)
                ) {
                    let (indent, outdent) = explicit_pair();
                    self.tokens.insert(i + k, outdent);
                    self.tokens.insert(i + k, indent);
                    return 2 + k;
                }
            }
        }

        if SINGLE_LINERS.contains(tag)
            && next != Some(Tag::Indent)
            && !(tag == Tag::Else && next == Some(Tag::If))
        {
            let starter = tag;
            let (indent, outdent) = generated_pair(self.tokens[i].span, starter == Tag::Then);
            self.tokens.insert(i + 1, indent);
            tracing::trace!(?starter, at = i + 1, "single-line block");
            detect_end(
                &mut self.tokens,
                i + 2,
                |tokens, j| closes_single_line(tokens, j, starter),
                |tokens, _, at| {
                    let at = if tag_before(tokens, at) == Some(Tag::Comma) {
                        at - 1
                    } else {
                        at
                    };
                    tokens.insert(at, outdent);
                },
            );
            if starter == Tag::Then {
                self.tokens.remove(i);
            }
            return 1;
        }

        1
    }

    /// Retag an `if` as `POST_IF` when it trails its statement.
    ///
    /// An `if` that reaches the end of the line, or a generated block that
    /// did not come from `then`, never opened a block of its own.
    pub(super) fn tag_postfix_conditionals(&mut self) {
        for i in 0..self.tokens.len() {
            if !self.tokens[i].is(Tag::If) {
                continue;
            }
            detect_end(
                &mut self.tokens,
                i + 1,
                |tokens, j| match tokens[j].tag {
                    Tag::Terminator => true,
                    Tag::Indent => !SINGLE_LINERS.contains_opt(tag_before(tokens, j)),
                    _ => false,
                },
                |tokens, token, _| {
                    let end = &tokens[token];
                    if !end.is(Tag::Indent) || (end.is_generated() && !end.from_then()) {
                        tokens[i].tag = Tag::PostIf;
                    }
                },
            );
        }
        tracing::debug!(tokens = self.tokens.len(), "tagged postfix conditionals");
    }
}

/// Whether the token at `i` ends a single-line body opened by `starter`.
fn closes_single_line(tokens: &[Token], i: usize, starter: Tag) -> bool {
    let token = &tokens[i];
    let tag = token.tag;
    let closes = token.value != ";"
        && SINGLE_CLOSERS.contains(tag)
        && !(tag == Tag::Terminator && EXPRESSION_CLOSE.contains_opt(tag_at(tokens, i + 1)))
        && !(tag == Tag::Else && starter != Tag::Then)
        && !(matches!(tag, Tag::Catch | Tag::Finally)
            && matches!(starter, Tag::Arrow | Tag::FatArrow));
    // `-> a\n.b` ends the function before the chained access.
    closes || (MEMBER_ACCESS.contains(tag) && i > 0 && tokens[i - 1].new_line())
}

fn generated_pair(origin: Option<Span>, from_then: bool) -> (Token, Token) {
    let mut indent = Token::generated(Tag::Indent, "2", origin);
    if from_then {
        indent.flags.insert(TokenFlags::FROM_THEN);
    }
    (indent, Token::generated(Tag::Outdent, "2", origin))
}

fn explicit_pair() -> (Token, Token) {
    (Token::explicit(Tag::Indent, "2"), Token::explicit(Tag::Outdent, "2"))
}
