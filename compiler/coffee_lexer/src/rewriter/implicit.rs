//! Implicit call parentheses and object braces.
//!
//! `f a, b` is a call and `a: 1, b: 2` an object even without brackets.
//! A single forward walk keeps a stack of the brackets it is inside,
//! both real ones and the implicit ones it opened itself, and decides at
//! each token whether to open or close an implicit pair.

use coffee_ir::{Span, Tag, TagSet, Token};

use super::{tag_at, tag_before, Rewriter};
use crate::categories::{
    CLAUSE_HEADERS, EXPRESSION_END, EXPRESSION_START, IMPLICIT_CALL, IMPLICIT_CONTROL,
    IMPLICIT_END, IMPLICIT_FUNC, IMPLICIT_UNSPACED_CALL, INDENT_CONTINUES_CALL, LINE_BREAK,
    MEMBER_ACCESS,
};

/// What a stack entry stands for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Scope {
    /// An implicit call opened by this pass.
    Call,
    /// An implicit object opened by this pass.
    Object,
    /// The header of a control keyword inside an implicit call.
    Control,
    /// A real opening bracket, or an `INDENT`.
    Explicit(Tag),
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    scope: Scope,
    /// Where the opener was when it was pushed. Not kept up to date as
    /// tokens are inserted before it.
    index: usize,
    same_line: bool,
    starts_line: bool,
}

impl Frame {
    fn new(scope: Scope, index: usize) -> Self {
        Frame {
            scope,
            index,
            same_line: true,
            starts_line: false,
        }
    }

    fn is_implicit(&self) -> bool {
        !matches!(self.scope, Scope::Explicit(_))
    }

    /// A real or implicit `{`.
    fn is_brace(&self) -> bool {
        matches!(self.scope, Scope::Object | Scope::Explicit(Tag::LBrace))
    }
}

/// State of the implicit bracket walk.
struct Implicit<'a> {
    tokens: &'a mut Vec<Token>,
    stack: Vec<Frame>,
    /// Between `for` and the end of its header, where `a: b` is not an object.
    inside_for: bool,
}

impl Rewriter {
    pub(super) fn add_implicit_braces_and_parens(&mut self) {
        let mut walk = Implicit {
            tokens: &mut self.tokens,
            stack: Vec::new(),
            inside_for: false,
        };
        let mut i = 0;
        while i < walk.tokens.len() {
            i += walk.step(i);
        }
        tracing::debug!(tokens = self.tokens.len(), "added implicit braces and parens");
    }
}

impl Implicit<'_> {
    /// Process the token at `start`; returns how far to advance.
    ///
    /// Insertions before the current token shift it right, so `i` tracks
    /// where it is now and the step accounts for everything inserted.
    fn step(&mut self, start: usize) -> usize {
        let mut i = start;
        let tag = self.tokens[i].tag;
        let prev = start.checked_sub(1).map(|p| &self.tokens[p]);
        let prev_tag = prev.map(|token| token.tag);
        let prev_new_line = prev.is_some_and(Token::new_line);
        let next_tag = tag_at(self.tokens.as_slice(), i + 1);
        let forward = |i: usize, n: usize| i - start + n;

        // A control keyword inside an implicit call keeps its header in it.
        if self.in_implicit_call() && IMPLICIT_CONTROL.contains(tag) {
            self.stack.push(Frame::new(Scope::Control, i));
            return forward(i, 1);
        }

        if tag == Tag::Indent && self.in_implicit() {
            if !INDENT_CONTINUES_CALL.contains_opt(prev_tag) {
                while self.in_implicit_call() {
                    self.end_implicit_call(&mut i);
                }
            }
            if self.in_implicit_control() {
                self.stack.pop();
            }
            self.stack.push(Frame::new(Scope::Explicit(tag), i));
            return forward(i, 1);
        }

        if EXPRESSION_START.contains(tag) {
            self.stack.push(Frame::new(Scope::Explicit(tag), i));
            return forward(i, 1);
        }

        if EXPRESSION_END.contains(tag) {
            while let Some(top) = self.stack.last().copied().filter(Frame::is_implicit) {
                match top.scope {
                    Scope::Call => self.end_implicit_call(&mut i),
                    Scope::Object => self.end_implicit_object(&mut i, None),
                    _ => {
                        self.stack.pop();
                    }
                }
            }
            self.stack.pop();
        }

        // `f a`, `f -1`, `a? b`
        let token = &self.tokens[i];
        let next = self.tokens.get(i + 1);
        let callable = (IMPLICIT_FUNC.contains(tag) && token.spaced() && !token.string_end())
            || (tag == Tag::Question && i > 0 && !self.tokens[i - 1].spaced());
        let argument = next.is_some_and(|next| {
            IMPLICIT_CALL.contains(next.tag)
                || (IMPLICIT_UNSPACED_CALL.contains(next.tag) && !next.spaced() && !next.new_line())
        });
        if callable && argument {
            if tag == Tag::Question {
                self.tokens[i].tag = Tag::FuncExist;
            }
            self.start_implicit_call(i + 1);
            return forward(i, 2);
        }

        // `f` followed by an indented object:
        //
        //     f
        //       a: 1
        if IMPLICIT_FUNC.contains(tag)
            && self.match_tags(i + 1, &[Some(Tag::Indent), None, Some(Tag::Colon)])
            && !self.find_tags_backwards(i, CLAUSE_HEADERS)
        {
            self.start_implicit_call(i + 1);
            self.stack.push(Frame::new(Scope::Explicit(Tag::Indent), i + 2));
            return forward(i, 3);
        }

        if tag == Tag::Colon {
            let mut s = match i.checked_sub(2) {
                Some(at) if self.tokens[at].is(Tag::At) => at,
                _ => i.saturating_sub(1),
            };
            while s >= 2 && self.tokens[s - 2].is(Tag::HereComment) {
                s -= 2;
            }
            self.inside_for = next_tag == Some(Tag::For);

            let before = s.checked_sub(1).map(|p| &self.tokens[p]);
            let before_tag = before.map(|token| token.tag);
            let starts_line =
                s == 0 || before.is_some_and(|token| LINE_BREAK.contains(token.tag) || token.new_line());

            // Already inside an object: `{a: 1, b: 2}` or an indented body.
            if let Some(top) = self.stack.last() {
                let in_object = top.is_brace()
                    || (top.scope == Scope::Explicit(Tag::Indent)
                        && tag_before(self.tokens.as_slice(), top.index) == Some(Tag::LBrace));
                if in_object
                    && (starts_line || matches!(before_tag, Some(Tag::Comma | Tag::LBrace)))
                {
                    return forward(i, 1);
                }
            }

            let origin = self.tokens[i].span;
            self.start_implicit_object(s, starts_line, origin);
            return forward(i, 2);
        }

        if LINE_BREAK.contains(tag) {
            if let Some(top) = self.stack.last_mut().filter(|top| top.scope == Scope::Object) {
                top.same_line = false;
            }
        }

        // End implicit calls and objects at the end of their line, or
        // before a chained access on a new line:
        //
        //     f a
        //     .b()
        let new_line = prev_tag == Some(Tag::Outdent) || prev_new_line;
        if IMPLICIT_END.contains(tag) || (MEMBER_ACCESS.contains(tag) && new_line) {
            while let Some(top) = self.stack.last().copied().filter(Frame::is_implicit) {
                if top.scope == Scope::Call && prev_tag != Some(Tag::Comma) {
                    self.end_implicit_call(&mut i);
                } else if top.scope == Scope::Object
                    && !self.inside_for
                    && top.same_line
                    && tag != Tag::Terminator
                    && prev_tag != Some(Tag::Colon)
                {
                    // `return a: 1, b: 2 unless c`
                    self.end_implicit_object(&mut i, None);
                } else if top.scope == Scope::Object
                    && tag == Tag::Terminator
                    && prev_tag != Some(Tag::Comma)
                    && !(top.starts_line && self.looks_objectish(i + 1))
                {
                    self.end_implicit_object(&mut i, None);
                } else {
                    break;
                }
            }
        }

        // A comma that does not lead to another key ends the object:
        //
        //     f a: 1, b
        if tag == Tag::Comma
            && !self.looks_objectish(i + 1)
            && self.in_implicit_object()
            && !self.inside_for
            && (next_tag != Some(Tag::Terminator) || !self.looks_objectish(i + 2))
        {
            let offset = usize::from(next_tag == Some(Tag::Outdent));
            while self.in_implicit_object() {
                let at = i + offset;
                self.end_implicit_object(&mut i, Some(at));
            }
        }

        forward(i, 1)
    }

    fn in_implicit(&self) -> bool {
        self.stack.last().is_some_and(Frame::is_implicit)
    }

    fn in_implicit_call(&self) -> bool {
        self.top_is(Scope::Call)
    }

    fn in_implicit_object(&self) -> bool {
        self.top_is(Scope::Object)
    }

    fn in_implicit_control(&self) -> bool {
        self.top_is(Scope::Control)
    }

    fn top_is(&self, scope: Scope) -> bool {
        self.stack.last().is_some_and(|top| top.scope == scope)
    }

    fn start_implicit_call(&mut self, at: usize) {
        self.stack.push(Frame::new(Scope::Call, at));
        self.tokens.insert(at, Token::generated(Tag::CallStart, "(", None));
        tracing::trace!(at, "implicit call start");
    }

    /// Close the innermost implicit call just before the current token.
    fn end_implicit_call(&mut self, i: &mut usize) {
        self.stack.pop();
        self.tokens.insert(*i, Token::generated(Tag::CallEnd, ")", None));
        tracing::trace!(at = *i, "implicit call end");
        *i += 1;
    }

    fn start_implicit_object(&mut self, at: usize, starts_line: bool, origin: Option<Span>) {
        self.stack.push(Frame {
            starts_line,
            ..Frame::new(Scope::Object, at)
        });
        self.tokens.insert(at, Token::generated(Tag::LBrace, "{", origin));
        tracing::trace!(at, starts_line, "implicit object start");
    }

    /// Close the innermost implicit object at `at`, or just before the
    /// current token.
    fn end_implicit_object(&mut self, i: &mut usize, at: Option<usize>) {
        let at = at.unwrap_or(*i);
        let origin = self.tokens[*i].span;
        self.stack.pop();
        self.tokens.insert(at, Token::generated(Tag::RBrace, "}", origin));
        tracing::trace!(at, "implicit object end");
        *i += 1;
    }

    /// Whether the tags from `i` on follow `pattern`, where `None` matches
    /// anything. Block comments in between are skipped.
    fn match_tags(&self, i: usize, pattern: &[Option<Tag>]) -> bool {
        let mut fuzz = 0;
        for (j, expected) in pattern.iter().enumerate() {
            while tag_at(self.tokens.as_slice(), i + j + fuzz) == Some(Tag::HereComment) {
                fuzz += 2;
            }
            if let Some(expected) = *expected {
                if tag_at(self.tokens.as_slice(), i + j + fuzz) != Some(expected) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether an object key starts at `i`: `a:` or `@a:`.
    fn looks_objectish(&self, i: usize) -> bool {
        self.match_tags(i, &[Some(Tag::At), None, Some(Tag::Colon)])
            || self.match_tags(i, &[None, Some(Tag::Colon)])
    }

    /// Walk back from `i` over balanced brackets and generated openers to
    /// the start of the line; whether the walk stopped on one of `tags`.
    fn find_tags_backwards(&self, mut i: usize, tags: TagSet) -> bool {
        let mut depth = 0usize;
        loop {
            let token = &self.tokens[i];
            let tag = token.tag;
            let passes = depth > 0
                || (!tags.contains(tag)
                    && (!EXPRESSION_START.contains(tag) || token.is_generated())
                    && !LINE_BREAK.contains(tag));
            if !passes {
                return tags.contains(tag);
            }
            if EXPRESSION_END.contains(tag) {
                depth += 1;
            } else if EXPRESSION_START.contains(tag) && depth > 0 {
                depth -= 1;
            }
            match i.checked_sub(1) {
                Some(p) => i = p,
                None => return false,
            }
        }
    }
}
