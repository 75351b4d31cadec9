//! Closed set of token categories.

use std::fmt;

/// Token category, with semantic range layout.
///
/// All values fit in a single `u8` below 128 so that [`TagSet`](super::TagSet)
/// can use a `u128` bitset. Categories are arranged in contiguous ranges
/// separated by gaps for future expansion:
///
/// | Range   | Category                     |
/// |---------|------------------------------|
/// | 0-10    | Literals and value words     |
/// | 16-23   | Operator classes             |
/// | 32-55   | Keywords                     |
/// | 64-66   | Layout                       |
/// | 72-85   | Brackets (source and tagged) |
/// | 96-114  | Punctuation                  |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Literals (0-10) ===
    Identifier = 0,
    Number = 1,
    String = 2,
    Regex = 3,
    Js = 4,
    HereComment = 5,
    Bool = 6,
    Null = 7,
    Undefined = 8,
    This = 9,
    Super = 10,

    // === Operator classes (16-23) ===
    Unary = 16,
    UnaryMath = 17,
    Math = 18,
    Compare = 19,
    CompoundAssign = 20,
    Shift = 21,
    Logic = 22,
    Relation = 23,

    // === Keywords (32-55) ===
    ForIn = 32,
    ForOf = 33,
    Own = 34,
    Statement = 35,
    Return = 36,
    Throw = 37,
    Debugger = 38,
    If = 39,
    PostIf = 40,
    Else = 41,
    Switch = 42,
    For = 43,
    While = 44,
    Until = 45,
    Loop = 46,
    Try = 47,
    Catch = 48,
    Finally = 49,
    Class = 50,
    Extends = 51,
    Then = 52,
    By = 53,
    When = 54,
    LeadingWhen = 55,

    // === Layout (64-66) ===
    Indent = 64,
    Outdent = 65,
    Terminator = 66,

    // === Brackets (72-85) ===
    LParen = 72,
    RParen = 73,
    LBracket = 74,
    RBracket = 75,
    LBrace = 76,
    RBrace = 77,
    CallStart = 78,
    CallEnd = 79,
    ParamStart = 80,
    ParamEnd = 81,
    IndexStart = 82,
    IndexEnd = 83,
    IndexSoak = 84,
    FuncExist = 85,

    // === Punctuation (96-114) ===
    Comma = 96,          // ,
    Colon = 97,          // :
    Dot = 98,            // .
    SoakAccess = 99,     // ?.
    Prototype = 100,     // ::
    SoakPrototype = 101, // ?::
    At = 102,            // @
    Question = 103,      // ?
    Assign = 104,        // =
    Plus = 105,          // +
    Minus = 106,         // -
    Increment = 107,     // ++
    Decrement = 108,     // --
    Power = 109,         // **
    Arrow = 110,         // ->
    FatArrow = 111,      // =>
    Range = 112,         // ..
    Splat = 113,         // ...
    Backslash = 114,     // \
}

impl Tag {
    /// Maximum discriminant value across all variants.
    ///
    /// Must be < 128 for `TagSet` (u128 bitset).
    pub const MAX_DISCRIMINANT: u8 = Self::Backslash as u8;

    /// Grammar terminal name of this tag.
    ///
    /// Word categories are upper-cased (`IDENTIFIER`, `CALL_START`), bare
    /// punctuation is spelled as written (`(`, `?.`, `=>`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Regex => "REGEX",
            Self::Js => "JS",
            Self::HereComment => "HERECOMMENT",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::Undefined => "UNDEFINED",
            Self::This => "THIS",
            Self::Super => "SUPER",
            Self::Unary => "UNARY",
            Self::UnaryMath => "UNARY_MATH",
            Self::Math => "MATH",
            Self::Compare => "COMPARE",
            Self::CompoundAssign => "COMPOUND_ASSIGN",
            Self::Shift => "SHIFT",
            Self::Logic => "LOGIC",
            Self::Relation => "RELATION",
            Self::ForIn => "FORIN",
            Self::ForOf => "FOROF",
            Self::Own => "OWN",
            Self::Statement => "STATEMENT",
            Self::Return => "RETURN",
            Self::Throw => "THROW",
            Self::Debugger => "DEBUGGER",
            Self::If => "IF",
            Self::PostIf => "POST_IF",
            Self::Else => "ELSE",
            Self::Switch => "SWITCH",
            Self::For => "FOR",
            Self::While => "WHILE",
            Self::Until => "UNTIL",
            Self::Loop => "LOOP",
            Self::Try => "TRY",
            Self::Catch => "CATCH",
            Self::Finally => "FINALLY",
            Self::Class => "CLASS",
            Self::Extends => "EXTENDS",
            Self::Then => "THEN",
            Self::By => "BY",
            Self::When => "WHEN",
            Self::LeadingWhen => "LEADING_WHEN",
            Self::Indent => "INDENT",
            Self::Outdent => "OUTDENT",
            Self::Terminator => "TERMINATOR",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::CallStart => "CALL_START",
            Self::CallEnd => "CALL_END",
            Self::ParamStart => "PARAM_START",
            Self::ParamEnd => "PARAM_END",
            Self::IndexStart => "INDEX_START",
            Self::IndexEnd => "INDEX_END",
            Self::IndexSoak => "INDEX_SOAK",
            Self::FuncExist => "FUNC_EXIST",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::SoakAccess => "?.",
            Self::Prototype => "::",
            Self::SoakPrototype => "?::",
            Self::At => "@",
            Self::Question => "?",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Increment => "++",
            Self::Decrement => "--",
            Self::Power => "**",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::Range => "..",
            Self::Splat => "...",
            Self::Backslash => "\\",
        }
    }

    /// The matching closer for an opener, or opener for a closer.
    ///
    /// Returns `None` for tags that are not structural brackets.
    pub const fn inverse(self) -> Option<Tag> {
        match self {
            Self::LParen => Some(Self::RParen),
            Self::RParen => Some(Self::LParen),
            Self::LBracket => Some(Self::RBracket),
            Self::RBracket => Some(Self::LBracket),
            Self::LBrace => Some(Self::RBrace),
            Self::RBrace => Some(Self::LBrace),
            Self::Indent => Some(Self::Outdent),
            Self::Outdent => Some(Self::Indent),
            Self::CallStart => Some(Self::CallEnd),
            Self::CallEnd => Some(Self::CallStart),
            Self::ParamStart => Some(Self::ParamEnd),
            Self::ParamEnd => Some(Self::ParamStart),
            Self::IndexStart => Some(Self::IndexEnd),
            Self::IndexEnd => Some(Self::IndexStart),
            _ => None,
        }
    }

    /// Whether this tag opens a structural bracket.
    pub const fn is_opener(self) -> bool {
        matches!(
            self,
            Self::LParen
                | Self::LBracket
                | Self::LBrace
                | Self::Indent
                | Self::CallStart
                | Self::ParamStart
                | Self::IndexStart
        )
    }

    /// Whether this tag closes a structural bracket.
    pub const fn is_closer(self) -> bool {
        matches!(
            self,
            Self::RParen
                | Self::RBracket
                | Self::RBrace
                | Self::Outdent
                | Self::CallEnd
                | Self::ParamEnd
                | Self::IndexEnd
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
