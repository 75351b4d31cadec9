//! Lexer error types.
//!
//! A lexical error aborts scanning: there is no recovery and no partial
//! token list. Each error carries:
//! - WHERE: 1-based `line` and `column` of the offending text
//! - WHAT: `kind` describing what went wrong, rendered as the message

use coffee_ir::{Span, Tag};
use thiserror::Error;

/// A lexer error located in the source.
///
/// Displays as `[line,column] : message`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[{line},{column}] : {kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// 1-based line.
    pub line: u32,
    /// 1-based column, counted in characters.
    pub column: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    // === Identifier Errors ===
    /// A word reserved by the target language used as a name.
    #[error("reserved word {word}")]
    ReservedWord { word: String },
    /// Assignment to a keyword or reserved word.
    #[error("reserved word \"{word}\" can't be assigned")]
    ReservedAssignment { word: String },

    // === Numeric Errors ===
    /// `0B`, `0O` or `0X`.
    #[error("radix prefix '{literal}' must be lowercase")]
    UppercaseRadix { literal: String },
    /// `1E5`.
    #[error("exponential notation '{literal}' must be indicated with a lowercase 'e'")]
    UppercaseExponent { literal: String },
    /// `09`, `09.5` style literals whose digits rule out octal.
    #[error("decimal literal '{literal}' must not be prefixed with '0'")]
    LeadingZeroDecimal { literal: String },
    /// `0755`.
    #[error("octal literal '{literal}' must be prefixed with '0o'")]
    LegacyOctal { literal: String },

    // === Regex and Comment Errors ===
    /// A regex body that would read as a block comment opener.
    #[error("regular expressions cannot begin with `*`")]
    RegexStartsWithStar,
    /// A `###` block comment containing the target's comment terminator.
    #[error("block comment cannot contain \"*/\"")]
    IllegalBlockComment,

    // === Layout Errors ===
    /// A dedent below the file's base indentation.
    #[error("missing indentation")]
    MissingIndentation,
    /// A closer that does not match the innermost open bracket.
    #[error("unmatched {tag}")]
    Unmatched { tag: Tag },
    /// A bracket still open at end of input.
    #[error("missing {tag}")]
    Missing { tag: Tag },

    // === Unterminated Literals ===
    /// Missing closing quote.
    #[error("missing {quote} to close string literal")]
    UnterminatedString { quote: char },
    /// Missing closing backtick.
    #[error("missing ` to close embedded JavaScript")]
    UnterminatedJs,
    /// Missing closing `###`.
    #[error("missing ### to close block comment")]
    UnterminatedBlockComment,
    /// A character that starts no token.
    #[error("unexpected character {ch:?}")]
    UnexpectedCharacter { ch: char },
}

impl LexError {
    /// Create an error at a 1-based position.
    #[cold]
    pub fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }

    /// Create an error at the first position of a 0-based span.
    #[cold]
    pub fn at(kind: LexErrorKind, span: Span) -> Self {
        Self::new(kind, span.first_line + 1, span.first_column + 1)
    }

    /// The human-readable message, without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl LexErrorKind {
    /// Create a reserved word error.
    #[cold]
    pub fn reserved_word(word: &str) -> Self {
        Self::ReservedWord {
            word: word.to_owned(),
        }
    }

    /// Create a reserved assignment error.
    #[cold]
    pub fn reserved_assignment(word: &str) -> Self {
        Self::ReservedAssignment {
            word: word.to_owned(),
        }
    }

    /// Classify a malformed number literal, or `None` if it is well formed.
    ///
    /// Checks run in a fixed order: radix prefix case, exponent case,
    /// leading zero before `8`/`9`, then legacy octal.
    pub fn malformed_number(literal: &str) -> Option<Self> {
        let bytes = literal.as_bytes();
        let literal = || literal.to_owned();
        let leading_zero = bytes.first() == Some(&b'0');

        if leading_zero && matches!(bytes.get(1), Some(b'B' | b'O' | b'X')) {
            return Some(Self::UppercaseRadix { literal: literal() });
        }
        if bytes.contains(&b'E') && !literal().starts_with("0x") {
            return Some(Self::UppercaseExponent { literal: literal() });
        }
        if leading_zero {
            let digits = bytes[1..].iter().take_while(|b| b.is_ascii_digit());
            let mut saw_digit = false;
            for &digit in digits {
                saw_digit = true;
                if matches!(digit, b'8' | b'9') {
                    return Some(Self::LeadingZeroDecimal { literal: literal() });
                }
            }
            if saw_digit {
                return Some(Self::LegacyOctal { literal: literal() });
            }
        }
        None
    }
}
