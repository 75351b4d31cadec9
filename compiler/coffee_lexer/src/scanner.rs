//! Scanner: cleaned source text to the raw token list.
//!
//! The scanner walks the source one *chunk* at a time, where the chunk is
//! the unconsumed remainder. At each step the sub-scanners are tried in a
//! fixed priority order and the first one to consume bytes wins:
//!
//! | Order | Sub-scanner | Module |
//! |-------|-------------|--------|
//! | 1 | identifiers and keywords | `identifier` |
//! | 2 | comments | `literal` |
//! | 3 | horizontal whitespace | `layout` |
//! | 4 | newlines and indentation | `layout` |
//! | 5-9 | heredocs, strings, numbers, regexes, embedded JS | `literal` |
//! | 10 | operators and single characters | `literal` |
//!
//! Besides the token list the scanner keeps the indentation state
//! (`indent`, `indebt`, `outdebt`, the `indents` stack) and the `ends`
//! stack of closers it expects, so brackets and indentation are balanced
//! by the time the list reaches the rewriter.
//!
//! # Positions
//!
//! `chunk_line`/`chunk_column` hold the position of the chunk start. A
//! token's position is derived from its byte offset within the chunk, and
//! columns count characters. When cleaning prepends a newline, lines are
//! counted in the cleaned text and shifted back by one on output.

mod identifier;
mod layout;
mod literal;

use coffee_ir::{Span, Tag, Token};
use coffee_lexer_core::{is_horizontal_whitespace, is_whitespace, starts_block_comment};

use crate::lex_error::{LexError, LexErrorKind};

/// One sub-scanner: consumes bytes from the start of the chunk, or returns 0.
type SubScanner = fn(&mut Scanner) -> Result<usize, LexError>;

/// Sub-scanners in priority order.
const SUB_SCANNERS: [SubScanner; 10] = [
    Scanner::identifier_token,
    Scanner::comment_token,
    Scanner::whitespace_token,
    Scanner::line_token,
    Scanner::heredoc_token,
    Scanner::string_token,
    Scanner::number_token,
    Scanner::regex_token,
    Scanner::js_token,
    Scanner::literal_token,
];

/// Scanner state for one source text.
pub(crate) struct Scanner {
    /// Cleaned source.
    code: String,
    /// Byte offset of the chunk start.
    pos: usize,
    chunk_line: u32,
    chunk_column: u32,
    /// Lines added in front of the source by cleaning.
    line_shift: u32,
    tokens: Vec<Token>,
    /// Closers expected, innermost last, with the span of their opener.
    ends: Vec<(Tag, Span)>,
    /// Width of each open `INDENT`.
    indents: Vec<isize>,
    /// Current indentation level.
    indent: isize,
    /// Indentation of the first indented line of the file.
    base_indent: isize,
    /// Indentation swallowed by an unfinished line.
    indebt: isize,
    /// Dedent already accounted for by a matching outdent.
    outdebt: isize,
    /// Inside a `for` header, before its `in`/`of`.
    seen_for: bool,
}

impl Scanner {
    pub(crate) fn new(source: &str) -> Self {
        let (code, line_shift) = clean(source);
        Scanner {
            code,
            pos: 0,
            chunk_line: 0,
            chunk_column: 0,
            line_shift,
            tokens: Vec::new(),
            ends: Vec::new(),
            indents: Vec::new(),
            indent: 0,
            base_indent: 0,
            indebt: 0,
            outdebt: 0,
            seen_for: false,
        }
    }

    /// Scan the whole source.
    pub(crate) fn run(mut self) -> Result<Vec<Token>, LexError> {
        while self.pos < self.code.len() {
            let consumed = self.next_token()?;
            self.advance(consumed);
        }
        self.close_indentation()?;
        if let Some(&(tag, opener)) = self.ends.last() {
            return Err(LexError::at(LexErrorKind::Missing { tag }, opener));
        }
        tracing::debug!(tokens = self.tokens.len(), "scanned");
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> Result<usize, LexError> {
        for scan in SUB_SCANNERS {
            let consumed = scan(self)?;
            if consumed > 0 {
                return Ok(consumed);
            }
        }
        Err(self.unrecognized())
    }

    /// Move the chunk start forward by `consumed` bytes.
    fn advance(&mut self, consumed: usize) {
        let (line, column) = self.position_at(consumed);
        self.chunk_line = line;
        self.chunk_column = column;
        self.pos += consumed;
    }

    #[inline]
    fn chunk(&self) -> &str {
        &self.code[self.pos..]
    }

    // === Positions ===

    /// Unshifted line and column of the character starting at `offset` in
    /// the chunk. Offsets past the chunk clamp to its end.
    fn position_at(&self, offset: usize) -> (u32, u32) {
        let chunk = self.chunk();
        let mut end = offset.min(chunk.len());
        while !chunk.is_char_boundary(end) {
            end -= 1;
        }
        let text = &chunk[..end];
        match text.rfind('\n') {
            Some(last_newline) => {
                let lines = text.bytes().filter(|&b| b == b'\n').count();
                (
                    self.chunk_line.saturating_add(width(lines)),
                    char_width(&text[last_newline + 1..]),
                )
            }
            None => (
                self.chunk_line,
                self.chunk_column.saturating_add(char_width(text)),
            ),
        }
    }

    /// Span of `len` bytes at `offset` in the chunk. An empty span is a point.
    fn span_at(&self, offset: usize, len: usize) -> Span {
        let (first_line, first_column) = self.position_at(offset);
        let last = offset + len.saturating_sub(1);
        let (last_line, last_column) = self.position_at(last);
        Span::new(
            first_line.saturating_sub(self.line_shift),
            first_column,
            last_line.saturating_sub(self.line_shift),
            last_column,
        )
    }

    // === Tokens ===

    fn make_token(&self, tag: Tag, value: impl Into<String>, offset: usize, len: usize) -> Token {
        Token::new(tag, value, self.span_at(offset, len))
    }

    fn token(&mut self, tag: Tag, value: impl Into<String>, offset: usize, len: usize) {
        let token = self.make_token(tag, value, offset, len);
        self.tokens.push(token);
    }

    #[inline]
    fn last_tag(&self) -> Option<Tag> {
        self.tokens.last().map(|token| token.tag)
    }

    #[inline]
    fn last_value(&self) -> Option<&str> {
        self.tokens.last().map(|token| token.value.as_str())
    }

    // === Pairing ===

    /// Close the innermost open bracket with `tag`.
    ///
    /// An `OUTDENT` expected in its place is closed first, so a closer at
    /// the end of an indented block (`f((x) ->\n  x)`) still balances.
    fn pair(&mut self, tag: Tag) -> Result<(), LexError> {
        loop {
            let wanted = self.ends.last().map(|&(wanted, _)| wanted);
            if wanted == Some(tag) {
                self.ends.pop();
                return Ok(());
            }
            if wanted != Some(Tag::Outdent) {
                return Err(self.error(LexErrorKind::Unmatched { tag }, 0));
            }
            let open = self.ends.len();
            let last_indent = self.indents.last().copied().unwrap_or(0);
            self.outdent_token(last_indent, true, None)?;
            if self.ends.len() >= open {
                return Err(self.error(LexErrorKind::Unmatched { tag }, 0));
            }
        }
    }

    // === Errors ===

    /// Error located at `offset` in the chunk.
    #[cold]
    fn error(&self, kind: LexErrorKind, offset: usize) -> LexError {
        let (line, column) = self.position_at(offset);
        let line = line.saturating_sub(self.line_shift);
        tracing::trace!(%kind, line, column, "lex error");
        LexError::new(kind, line + 1, column + 1)
    }

    /// Error for a chunk no sub-scanner accepts.
    #[cold]
    fn unrecognized(&self) -> LexError {
        let chunk = self.chunk();
        let kind = match chunk.chars().next() {
            Some(quote @ ('\'' | '"')) => LexErrorKind::UnterminatedString { quote },
            Some('`') => LexErrorKind::UnterminatedJs,
            _ if starts_block_comment(chunk) => LexErrorKind::UnterminatedBlockComment,
            ch => LexErrorKind::UnexpectedCharacter {
                ch: ch.unwrap_or('\0'),
            },
        };
        self.error(kind, 0)
    }
}

/// Normalize source text before scanning.
///
/// Strips a byte order mark, every `\r`, and trailing whitespace. Source
/// that starts with horizontal whitespace gets a leading newline so its
/// first line is measured as indentation; the returned shift undoes that
/// line on output.
fn clean(source: &str) -> (String, u32) {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let mut code = source.replace('\r', "");
    let trimmed = code.trim_end_matches(is_whitespace_char).len();
    code.truncate(trimmed);
    if code.bytes().next().is_some_and(is_horizontal_whitespace) {
        code.insert(0, '\n');
        return (code, 1);
    }
    (code, 0)
}

fn is_whitespace_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_whitespace)
}

/// Whether `body`, after leading whitespace, starts with `*`.
fn starts_with_star(body: &str) -> bool {
    body.bytes().find(|&b| !is_whitespace(b)) == Some(b'*')
}

#[inline]
fn width(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[inline]
fn char_width(text: &str) -> u32 {
    width(text.chars().count())
}

/// Indentation arithmetic is signed: dedents can overshoot.
#[inline]
fn dent(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
