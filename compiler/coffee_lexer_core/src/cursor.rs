//! Bounds-checked byte cursor over a string slice.
//!
//! Reads past the end of the slice yield `0x00`, which no matcher accepts,
//! so matchers can test `current()`/`peek()` without checking for EOF first.
//! An interior NUL byte is distinguished from the end by [`Cursor::is_eof`].

/// Byte cursor over a `&str`.
///
/// The cursor is [`Copy`], so a matcher can snapshot it before an optional
/// sub-pattern and restore it if the sub-pattern fails.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.nth(0)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.nth(1)
    }

    /// Returns the byte `n` positions ahead of current.
    #[inline]
    pub fn nth(&self, n: usize) -> u8 {
        self.src.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Does nothing at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.rest().chars().next() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute byte offset.
    #[inline]
    pub fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or("")
    }

    /// Check whether the remainder starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consume `prefix` if the remainder starts with it.
    #[inline]
    pub fn eat(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume one byte if `pred` accepts it.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        if !self.is_eof() && pred(self.current()) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed. Stops at EOF even if `pred(0)`
    /// is `true`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }
}
