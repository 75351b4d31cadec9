//! Whitespace, newlines and indentation.
//!
//! Indentation changes become `INDENT`/`OUTDENT` tokens and line ends
//! become `TERMINATOR`s, except on lines the previous line leaves
//! unfinished. The bookkeeping:
//!
//! - `indent`: current level
//! - `indebt`: extra indentation of continuation lines, not yet emitted
//! - `outdebt`: dedent already paid by closing an `INDENT` early
//! - `indents`: widths of the open `INDENT` tokens

use coffee_ir::{Tag, TokenFlags};
use coffee_lexer_core::{line_continuer, multi_dent, whitespace};

use super::{dent, Scanner};
use crate::categories::UNFINISHED;
use crate::lex_error::{LexError, LexErrorKind};

impl Scanner {
    /// Mark the previous token as followed by spaces, or by a newline.
    ///
    /// Only horizontal whitespace is consumed; a newline is left for
    /// [`line_token`](Self::line_token).
    pub(super) fn whitespace_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        let len = whitespace(chunk);
        let newline = chunk.starts_with('\n');
        if len == 0 && !newline {
            return Ok(0);
        }
        if let Some(prev) = self.tokens.last_mut() {
            prev.flags.insert(if len > 0 {
                TokenFlags::SPACED
            } else {
                TokenFlags::NEW_LINE
            });
        }
        Ok(len)
    }

    /// Scan a run of newlines and the indentation of the last one.
    pub(super) fn line_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        if !chunk.starts_with('\n') {
            return Ok(0);
        }
        let len = multi_dent(chunk);
        let last_newline = chunk[..len].rfind('\n').unwrap_or(0);
        let width = len - 1 - last_newline;
        let size = dent(width);
        let no_newlines = self.unfinished();
        self.seen_for = false;

        if size - self.indebt == self.indent {
            if no_newlines {
                self.suppress_newlines();
            } else {
                self.newline_token(0);
            }
            return Ok(len);
        }

        if size > self.indent {
            if no_newlines {
                self.indebt = size - self.indent;
                self.suppress_newlines();
                return Ok(len);
            }
            if self.tokens.is_empty() {
                self.base_indent = size;
                self.indent = size;
                return Ok(len);
            }
            let diff = size - self.indent + self.outdebt;
            self.token(Tag::Indent, diff.to_string(), len - width, width);
            tracing::trace!(diff, size, "indent");
            self.indents.push(diff);
            let opener = self.span_at(len - width, width);
            self.ends.push((Tag::Outdent, opener));
            self.outdebt = 0;
            self.indebt = 0;
            self.indent = size;
        } else if size < self.base_indent {
            return Err(self.error(LexErrorKind::MissingIndentation, len));
        } else {
            self.indebt = 0;
            self.outdent_token(self.indent - size, no_newlines, Some(len))?;
        }
        Ok(len)
    }

    /// Close indentation levels totalling `move_out` columns.
    ///
    /// `outdent_length` is the length of the newline run that caused the
    /// dedent; when the line it leads to starts with a closing bracket, the
    /// whole innermost level is closed so the bracket pairs with its opener.
    pub(super) fn outdent_token(
        &mut self,
        mut move_out: isize,
        no_newlines: bool,
        outdent_length: Option<usize>,
    ) -> Result<(), LexError> {
        let outdent_length = outdent_length.filter(|&len| len != 0);
        let mut decreased_indent = self.indent - move_out;
        let mut last_dent = None;

        while move_out > 0 {
            match self.indents.last().copied() {
                Some(last) if last > 0 && last == self.outdebt => {
                    move_out -= self.outdebt;
                    self.outdebt = 0;
                }
                Some(last) if last > 0 && last < self.outdebt => {
                    self.outdebt -= last;
                    move_out -= last;
                }
                Some(last) if last > 0 => {
                    self.indents.pop();
                    let dent = last + self.outdebt;
                    let closer_follows = outdent_length.is_some_and(|len| {
                        matches!(self.chunk().as_bytes().get(len), Some(b')' | b'}' | b']'))
                    });
                    if closer_follows {
                        decreased_indent -= dent - move_out;
                        move_out = dent;
                    }
                    self.outdebt = 0;
                    self.pair(Tag::Outdent)?;
                    self.token(Tag::Outdent, move_out.to_string(), 0, outdent_length.unwrap_or(0));
                    tracing::trace!(move_out, dent, "outdent");
                    move_out -= dent;
                    last_dent = Some(dent);
                }
                _ => move_out = 0,
            }
        }

        if last_dent.is_some_and(|dent| dent != 0) {
            self.outdebt -= move_out;
        }
        self.pop_semicolons();
        if !(self.last_tag() == Some(Tag::Terminator) || no_newlines) {
            self.token(Tag::Terminator, "\n", outdent_length.unwrap_or(0), 0);
        }
        self.indent = decreased_indent;
        Ok(())
    }

    /// Close every open indentation level at end of input.
    pub(super) fn close_indentation(&mut self) -> Result<(), LexError> {
        self.outdent_token(self.indent, false, None)
    }

    /// Whether the next line continues the current expression.
    fn unfinished(&self) -> bool {
        line_continuer(self.chunk()) || UNFINISHED.contains_opt(self.last_tag())
    }

    /// Drop a `\` that continued the line.
    fn suppress_newlines(&mut self) {
        if self.last_value() == Some("\\") {
            self.tokens.pop();
        }
    }

    fn newline_token(&mut self, offset: usize) {
        self.pop_semicolons();
        if self.last_tag() != Some(Tag::Terminator) {
            self.token(Tag::Terminator, "\n", offset, 0);
        }
    }

    /// Trailing `;` tokens are redundant before a line end.
    fn pop_semicolons(&mut self) {
        while self.last_value() == Some(";") {
            self.tokens.pop();
        }
    }
}
