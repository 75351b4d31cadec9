//! Comments, literals and operators.

use coffee_ir::Tag;
use coffee_lexer_core::{comment, heredoc, heregex, js, number, operator, regex, simple_string, Comment};

use super::{starts_with_star, Scanner};
use crate::categories::{CALLABLE, INDEXABLE, NOT_REGEX, NOT_SPACED_REGEX};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

impl Scanner {
    /// Block comments become `HERECOMMENT`; line comments are dropped.
    pub(super) fn comment_token(&mut self) -> Result<usize, LexError> {
        match comment(self.chunk()) {
            Some(Comment::Block { len, body }) => {
                let body = self.chunk()[body].to_owned();
                if body.contains("*/") {
                    return Err(self.error(LexErrorKind::IllegalBlockComment, 0));
                }
                self.token(Tag::HereComment, body, 0, len);
                Ok(len)
            }
            Some(Comment::Line { len }) => Ok(len),
            None => Ok(0),
        }
    }

    pub(super) fn heredoc_token(&mut self) -> Result<usize, LexError> {
        Ok(self.verbatim(Tag::String, heredoc(self.chunk())))
    }

    pub(super) fn string_token(&mut self) -> Result<usize, LexError> {
        Ok(self.verbatim(Tag::String, simple_string(self.chunk())))
    }

    /// Numbers start with a digit; `.5` is a `.` followed by `5`.
    pub(super) fn number_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        if !chunk.as_bytes().first().is_some_and(u8::is_ascii_digit) {
            return Ok(0);
        }
        let Some(len) = number(chunk) else {
            return Ok(0);
        };
        if let Some(kind) = LexErrorKind::malformed_number(&chunk[..len]) {
            return Err(self.error(kind, 0));
        }
        Ok(self.verbatim(Tag::Number, Some(len)))
    }

    /// Regexes, including `///` block regexes.
    ///
    /// A `/` after a value is division: after a spaced token in
    /// `NOT_REGEX`, or an unspaced one in `NOT_SPACED_REGEX`.
    pub(super) fn regex_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        if !chunk.starts_with('/') {
            return Ok(0);
        }

        if let Some(found) = heregex(chunk) {
            let body = &chunk[found.body];
            if starts_with_star(body) {
                return Err(self.error(LexErrorKind::RegexStartsWithStar, 0));
            }
            let value = format!("/{body}/{}", &chunk[found.flags]);
            self.token(Tag::Regex, value, 0, found.len);
            return Ok(found.len);
        }

        if let Some(prev) = self.tokens.last() {
            let division = if prev.spaced() {
                NOT_REGEX
            } else {
                NOT_SPACED_REGEX
            };
            if division.contains(prev.tag) {
                return Ok(0);
            }
        }

        let Some(found) = regex(chunk) else {
            return Ok(0);
        };
        // `//` is floor division.
        if found.body.is_empty() {
            return Ok(0);
        }
        if chunk[found.body].starts_with('*') {
            return Err(self.error(LexErrorKind::RegexStartsWithStar, 0));
        }
        Ok(self.verbatim(Tag::Regex, Some(found.len)))
    }

    /// Backtick-quoted JavaScript, passed through without the backticks.
    pub(super) fn js_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        let Some(len) = js(chunk) else {
            return Ok(0);
        };
        let script = chunk[1..len - 1].to_owned();
        self.token(Tag::Js, script, 0, len);
        Ok(len)
    }

    /// Operators and single punctuation characters.
    pub(super) fn literal_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        let value = match operator(chunk) {
            0 => match chunk.chars().next() {
                Some(ch) => ch.to_string(),
                None => return Ok(0),
            },
            len => chunk[..len].to_owned(),
        };
        if matches!(value.as_str(), "->" | "=>") {
            self.tag_parameters();
        }

        if value == "=" {
            if let Some(prev) = self.tokens.last() {
                if !prev.is_reserved() && keywords::is_js_forbidden(&prev.value) {
                    let kind = LexErrorKind::reserved_assignment(&prev.value);
                    return Err(self.error(kind, 0));
                }
            }
            if let Some(prev) = self.tokens.last_mut() {
                if matches!(prev.value.as_str(), "||" | "&&") {
                    prev.tag = Tag::CompoundAssign;
                    prev.value.push('=');
                    return Ok(value.len());
                }
            }
        }

        let prev_spaced = self.tokens.last().is_some_and(|prev| prev.spaced());
        let glued = self
            .tokens
            .last()
            .filter(|prev| !prev.spaced())
            .map(|prev| prev.tag);

        let tag = match value.as_str() {
            ";" => {
                self.seen_for = false;
                Tag::Terminator
            }
            "*" | "/" | "%" | "//" | "%%" => Tag::Math,
            "==" | "!=" | "<" | ">" | "<=" | ">=" => Tag::Compare,
            "-=" | "+=" | "/=" | "*=" | "%=" | "||=" | "&&=" | "?=" | "<<=" | ">>=" | ">>>="
            | "&=" | "^=" | "|=" | "**=" | "//=" | "%%=" => Tag::CompoundAssign,
            "!" | "~" => Tag::UnaryMath,
            "<<" | ">>" | ">>>" => Tag::Shift,
            "&&" | "||" | "&" | "|" | "^" => Tag::Logic,
            "?" if prev_spaced => Tag::Logic,
            "(" if CALLABLE.contains_opt(glued) => {
                if glued == Some(Tag::Question) {
                    self.retag_last(Tag::FuncExist);
                }
                Tag::CallStart
            }
            "[" if INDEXABLE.contains_opt(glued) => {
                if glued == Some(Tag::Question) {
                    self.retag_last(Tag::IndexSoak);
                }
                Tag::IndexStart
            }
            other => match punctuation(other) {
                Some(tag) => tag,
                None => return Err(self.unrecognized()),
            },
        };

        let here = self.span_at(0, 1);
        match value.as_str() {
            "(" => self.ends.push((Tag::RParen, here)),
            "[" => self.ends.push((Tag::RBracket, here)),
            "{" => self.ends.push((Tag::RBrace, here)),
            ")" => self.pair(Tag::RParen)?,
            "]" => self.pair(Tag::RBracket)?,
            "}" => self.pair(Tag::RBrace)?,
            _ => {}
        }

        let len = value.len();
        self.token(tag, value, 0, len);
        Ok(len)
    }

    /// Retag the parenthesized list before an arrow as a parameter list.
    ///
    /// Walks back from the `)` before the arrow to its matching `(`. A
    /// matching `CALL_START` means the parens were a call, not parameters.
    fn tag_parameters(&mut self) {
        if self.last_tag() != Some(Tag::RParen) {
            return;
        }
        let Some(mut i) = self.tokens.len().checked_sub(1) else {
            return;
        };
        self.tokens[i].tag = Tag::ParamEnd;
        let mut depth = 0usize;
        while i > 0 {
            i -= 1;
            match self.tokens[i].tag {
                Tag::RParen => depth += 1,
                Tag::LParen | Tag::CallStart if depth > 0 => depth -= 1,
                Tag::LParen => {
                    self.tokens[i].tag = Tag::ParamStart;
                    return;
                }
                Tag::CallStart => return,
                _ => {}
            }
        }
    }

    /// Emit the first `len` bytes of the chunk as one token.
    fn verbatim(&mut self, tag: Tag, len: Option<usize>) -> usize {
        let Some(len) = len else {
            return 0;
        };
        let value = self.chunk()[..len].to_owned();
        self.token(tag, value, 0, len);
        len
    }

    fn retag_last(&mut self, tag: Tag) {
        if let Some(prev) = self.tokens.last_mut() {
            prev.tag = tag;
        }
    }
}

/// Tag of an operator or character that has no category of its own.
fn punctuation(value: &str) -> Option<Tag> {
    let tag = match value {
        "(" => Tag::LParen,
        ")" => Tag::RParen,
        "[" => Tag::LBracket,
        "]" => Tag::RBracket,
        "{" => Tag::LBrace,
        "}" => Tag::RBrace,
        "," => Tag::Comma,
        ":" => Tag::Colon,
        "." => Tag::Dot,
        "?." => Tag::SoakAccess,
        "::" => Tag::Prototype,
        "?::" => Tag::SoakPrototype,
        "@" => Tag::At,
        "?" => Tag::Question,
        "=" => Tag::Assign,
        "+" => Tag::Plus,
        "-" => Tag::Minus,
        "++" => Tag::Increment,
        "--" => Tag::Decrement,
        "**" => Tag::Power,
        "->" => Tag::Arrow,
        "=>" => Tag::FatArrow,
        ".." => Tag::Range,
        "..." => Tag::Splat,
        "\\" => Tag::Backslash,
        _ => return None,
    };
    Some(tag)
}
