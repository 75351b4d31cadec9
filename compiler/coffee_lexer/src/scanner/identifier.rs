//! Identifiers, keywords and object keys.

use coffee_ir::{Tag, TokenFlags};
use coffee_lexer_core::identifier;

use super::Scanner;
use crate::categories::{LINE_BREAK, MEMBER_ACCESS};
use crate::keywords;
use crate::lex_error::{LexError, LexErrorKind};

impl Scanner {
    /// Scan a word, classify it, and emit a `:` token for an object key.
    ///
    /// A word is *forced* to stay an identifier when it is a key (followed
    /// by `:`), a property (after `.` `?.` `::` `?::`), or a `this` member
    /// (after an unspaced `@`). Forced words skip keyword and alias
    /// handling, and are flagged reserved when the target forbids them.
    pub(super) fn identifier_token(&mut self) -> Result<usize, LexError> {
        let chunk = self.chunk();
        let Some(found) = identifier(chunk) else {
            return Ok(0);
        };
        let id = chunk[..found.ident_len].to_owned();

        if id == "own" && self.last_tag() == Some(Tag::For) {
            self.token(Tag::Own, id, 0, found.ident_len);
            return Ok(found.ident_len);
        }

        let forced = found.colon.is_some()
            || self.tokens.last().is_some_and(|prev| {
                MEMBER_ACCESS.contains(prev.tag) || (prev.is(Tag::At) && !prev.spaced())
            });

        let mut tag = Tag::Identifier;
        let mut value = id.clone();
        let mut negation = None;
        if !forced {
            if let Some(keyword) = keywords::lookup(&id) {
                tag = match keyword {
                    Tag::When if LINE_BREAK.contains_opt(self.last_tag()) => Tag::LeadingWhen,
                    Tag::For => {
                        self.seen_for = true;
                        Tag::For
                    }
                    Tag::Relation if id != "instanceof" && self.seen_for => {
                        self.seen_for = false;
                        if id == "in" {
                            Tag::ForIn
                        } else {
                            Tag::ForOf
                        }
                    }
                    Tag::Relation => {
                        // `not in`, `not of`, `not instanceof`
                        if self.last_value() == Some("!") {
                            negation = self.tokens.pop().and_then(|bang| bang.span);
                            value = format!("!{id}");
                        }
                        Tag::Relation
                    }
                    other => other,
                };
            }
            if let Some(canonical) = keywords::alias(&id) {
                value = canonical.to_owned();
            }
        }

        let mut reserved = false;
        if keywords::is_js_forbidden(&id) {
            if forced {
                reserved = true;
            } else if keywords::is_reserved(&id) {
                return Err(self.error(LexErrorKind::reserved_word(&id), 0));
            }
        }

        let mut token = self.make_token(tag, value, 0, found.ident_len);
        if reserved {
            token.flags.insert(TokenFlags::RESERVED);
        }
        if let (Some(bang), Some(span)) = (negation, token.span.as_mut()) {
            span.first_line = bang.first_line;
            span.first_column = bang.first_column;
        }
        self.tokens.push(token);

        if let Some(colon) = found.colon {
            self.token(Tag::Colon, ":", colon, 1);
        }
        Ok(found.len)
    }
}
