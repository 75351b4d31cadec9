//! Keyword, alias and reserved-word tables.
//!
//! Three word tables drive identifier classification:
//! 1. **Keywords**: words of the language or its target that get their own
//!    tag when they are not forced to be plain identifiers
//! 2. **Aliases**: English spellings of operators and booleans (`and`,
//!    `isnt`, `yes`, ...) substituted with their canonical text
//! 3. **Reserved words**: target-language words that may never be used as
//!    names, plus the target keywords and strict-mode names that are marked
//!    reserved when used as property names
//!
//! # Keyword tags
//!
//! [`lookup`] returns the tag a keyword takes in the common case, after the
//! alias and category folding: `unless` is `IF`, `typeof` is `UNARY`, `yes`
//! is `BOOL`, `in` is `RELATION`. Context-dependent retagging (`LEADING_WHEN`,
//! `FORIN`/`FOROF`, negated relations) is the scanner's job.

use coffee_ir::Tag;

/// Look up a keyword by text.
///
/// Returns `None` for words that are not keywords of either language.
/// Uses length-bucketing: keywords are 2-10 chars and start with an ASCII
/// letter.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<Tag> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    if !(2..=10).contains(&len) || !bytes[0].is_ascii_alphabetic() {
        return None;
    }

    match len {
        2 => match text {
            "by" => Some(Tag::By),
            "do" => Some(Tag::Unary),
            "if" => Some(Tag::If),
            "in" | "of" => Some(Tag::Relation),
            "is" => Some(Tag::Compare),
            "no" | "on" => Some(Tag::Bool),
            "or" => Some(Tag::Logic),
            _ => None,
        },
        3 => match text {
            "and" => Some(Tag::Logic),
            "for" => Some(Tag::For),
            "new" => Some(Tag::Unary),
            "not" => Some(Tag::Unary),
            "off" | "yes" => Some(Tag::Bool),
            "try" => Some(Tag::Try),
            _ => None,
        },
        4 => match text {
            "else" => Some(Tag::Else),
            "isnt" => Some(Tag::Compare),
            "loop" => Some(Tag::Loop),
            "null" => Some(Tag::Null),
            "then" => Some(Tag::Then),
            "this" => Some(Tag::This),
            "true" => Some(Tag::Bool),
            "when" => Some(Tag::When),
            _ => None,
        },
        5 => match text {
            "break" => Some(Tag::Statement),
            "catch" => Some(Tag::Catch),
            "class" => Some(Tag::Class),
            "false" => Some(Tag::Bool),
            "super" => Some(Tag::Super),
            "throw" => Some(Tag::Throw),
            "until" => Some(Tag::Until),
            "while" => Some(Tag::While),
            _ => None,
        },
        6 => match text {
            "delete" | "typeof" => Some(Tag::Unary),
            "return" => Some(Tag::Return),
            "switch" => Some(Tag::Switch),
            "unless" => Some(Tag::If),
            _ => None,
        },
        7 => match text {
            "extends" => Some(Tag::Extends),
            "finally" => Some(Tag::Finally),
            _ => None,
        },
        8 => match text {
            "continue" => Some(Tag::Statement),
            "debugger" => Some(Tag::Debugger),
            _ => None,
        },
        9 => match text {
            "undefined" => Some(Tag::Undefined),
            _ => None,
        },
        10 => match text {
            "instanceof" => Some(Tag::Relation),
            _ => None,
        },
        _ => None,
    }
}

/// Canonical spelling of an alias word.
///
/// `and` `or` `is` `isnt` `not` `yes` `no` `on` `off`
pub(crate) fn alias(text: &str) -> Option<&'static str> {
    match text {
        "and" => Some("&&"),
        "or" => Some("||"),
        "is" => Some("=="),
        "isnt" => Some("!="),
        "not" => Some("!"),
        "yes" | "on" => Some("true"),
        "no" | "off" => Some("false"),
        _ => None,
    }
}

/// Words reserved by the target language that the language itself does not
/// use. These are an error anywhere except as a property name.
pub(crate) fn is_reserved(text: &str) -> bool {
    matches!(
        text,
        "case"
            | "default"
            | "function"
            | "var"
            | "void"
            | "with"
            | "const"
            | "let"
            | "enum"
            | "export"
            | "import"
            | "native"
            | "__hasProp"
            | "__extends"
            | "__slice"
            | "__bind"
            | "__indexOf"
            | "implements"
            | "interface"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "static"
            | "yield"
    )
}

/// Whether `text` is a target-language keyword.
fn is_js_keyword(text: &str) -> bool {
    matches!(
        text,
        "true"
            | "false"
            | "null"
            | "this"
            | "new"
            | "delete"
            | "typeof"
            | "in"
            | "instanceof"
            | "return"
            | "throw"
            | "break"
            | "continue"
            | "debugger"
            | "if"
            | "else"
            | "switch"
            | "for"
            | "while"
            | "do"
            | "try"
            | "catch"
            | "finally"
            | "class"
            | "extends"
            | "super"
    )
}

/// Words that cannot be assigned to and are flagged when used as names:
/// target keywords, reserved words, and the strict-mode `arguments`/`eval`.
pub(crate) fn is_js_forbidden(text: &str) -> bool {
    is_js_keyword(text) || is_reserved(text) || matches!(text, "arguments" | "eval")
}

#[cfg(test)]
mod tests;
