//! End-to-end tests through the public entry points.
//!
//! Set `RUST_LOG=coffee_lexer=trace` to see the scanner and rewriter
//! traces for a failing test.

use std::sync::Once;

use coffee_lexer::{rewrite, scan, tokenize, LexError, LexErrorKind, Tag, Token};
use pretty_assertions::assert_eq;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn lex(source: &str) -> Vec<Token> {
    init_tracing();
    match tokenize(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("unexpected error lexing {source:?}: {err}"),
    }
}

fn tags(source: &str) -> Vec<Tag> {
    lex(source).into_iter().map(|token| token.tag).collect()
}

fn lex_error(source: &str) -> LexError {
    init_tracing();
    match tokenize(source) {
        Ok(tokens) => panic!("expected error lexing {source:?}, got {tokens:?}"),
        Err(err) => err,
    }
}

// === Pipeline ===

#[test]
fn tokenize_is_scan_then_rewrite() {
    let source = "f a: 1\nif b then c else d";
    let staged = match scan(source) {
        Ok(tokens) => rewrite(tokens),
        Err(err) => panic!("{err}"),
    };
    assert_eq!(lex(source), staged);
}

#[test]
fn every_token_has_a_span() {
    let source = "x = (a, b) ->\n  f a, b: c\n  g -> h if i\ny = [1..2]";
    for token in lex(source) {
        assert!(token.has_location(), "{token:?}");
    }
}

// === Scanner behavior ===

#[test]
fn aliases_tokenize_like_their_operators() {
    assert_eq!(tags("a and b"), tags("a && b"));
    assert_eq!(tags("a or b"), tags("a || b"));
    assert_eq!(
        tags("a and b"),
        vec![Tag::Identifier, Tag::Logic, Tag::Identifier, Tag::Terminator]
    );
}

#[test]
fn number_validation() {
    assert!(matches!(
        lex_error("0X1").kind,
        LexErrorKind::UppercaseRadix { .. }
    ));
    assert!(matches!(
        lex_error("1E5").kind,
        LexErrorKind::UppercaseExponent { .. }
    ));
    assert!(matches!(
        lex_error("089").kind,
        LexErrorKind::LeadingZeroDecimal { .. }
    ));
    assert!(matches!(
        lex_error("017").kind,
        LexErrorKind::LegacyOctal { .. }
    ));
    assert_eq!(tags("0x1E5"), vec![Tag::Number, Tag::Terminator]);
    assert_eq!(tags("0o17"), vec![Tag::Number, Tag::Terminator]);
}

#[test]
fn regex_or_division() {
    assert_eq!(
        tags("a / b"),
        vec![Tag::Identifier, Tag::Math, Tag::Identifier, Tag::Terminator]
    );
    assert_eq!(tags("/ab/"), vec![Tag::Regex, Tag::Terminator]);
}

#[test]
fn multi_line_literals_are_single_tokens() {
    assert_eq!(tags("///\n  a # b\n  c\n///g"), vec![Tag::Regex, Tag::Terminator]);
    assert_eq!(tags("\"\"\"\n  one\n  two\n\"\"\""), vec![Tag::String, Tag::Terminator]);
    assert_eq!(tags("`a\nb`"), vec![Tag::Js, Tag::Terminator]);
}

#[test]
fn negated_relation() {
    let tokens = lex("a not in b");
    assert_eq!(tokens[1].tag, Tag::Relation);
    assert_eq!(tokens[1].value, "!in");
}

#[test]
fn own_loop() {
    assert_eq!(
        tags("for own k of o"),
        vec![Tag::For, Tag::Own, Tag::Identifier, Tag::ForOf, Tag::Identifier, Tag::Terminator]
    );
}

#[test]
fn logical_assignment() {
    for source in ["a ||= b", "a or= b"] {
        let tokens = lex(source);
        assert_eq!(tokens[1].tag, Tag::CompoundAssign);
        assert_eq!(tokens[1].value, "||=");
    }
}

#[test]
fn parameter_list() {
    assert_eq!(
        tags("(a, b) -> a"),
        vec![
            Tag::ParamStart,
            Tag::Identifier,
            Tag::Comma,
            Tag::Identifier,
            Tag::ParamEnd,
            Tag::Arrow,
            Tag::Indent,
            Tag::Identifier,
            Tag::Outdent,
            Tag::Terminator,
        ]
    );
}

// === Rewriter behavior ===

#[test]
fn single_line_and_block_conditionals_agree() {
    assert_eq!(tags("if x then y else z"), tags("if x\n  y\nelse\n  z"));
}

#[test]
fn implicit_call_matches_explicit_call() {
    assert_eq!(tags("f x, y"), tags("f(x, y)"));
    assert_eq!(
        tags("f x, y"),
        vec![
            Tag::Identifier,
            Tag::CallStart,
            Tag::Identifier,
            Tag::Comma,
            Tag::Identifier,
            Tag::CallEnd,
            Tag::Terminator,
        ]
    );
}

#[test]
fn postfix_conditional() {
    assert_eq!(
        tags("x = 1 if y"),
        vec![Tag::Identifier, Tag::Assign, Tag::Number, Tag::PostIf, Tag::Identifier, Tag::Terminator]
    );
}

#[test]
fn implicit_object_in_implicit_call() {
    let tokens = lex("f a: 1");
    assert_eq!(
        tokens.iter().map(|token| token.tag).collect::<Vec<_>>(),
        vec![
            Tag::Identifier,
            Tag::CallStart,
            Tag::LBrace,
            Tag::Identifier,
            Tag::Colon,
            Tag::Number,
            Tag::RBrace,
            Tag::CallEnd,
            Tag::Terminator,
        ]
    );
    assert!(tokens[1].is_generated());
    assert_eq!(tokens[7].value, ")");
}

// === Errors ===

#[test]
fn unterminated_call_is_fatal() {
    let err = lex_error("f(x");
    assert_eq!(err.kind, LexErrorKind::Missing { tag: Tag::RParen });
    assert_eq!(err.to_string(), "[1,2] : missing )");
}

#[test]
fn call_left_open_by_rewriting_is_fatal() {
    let err = lex_error("@ switch ");
    assert_eq!(err.kind, LexErrorKind::Missing { tag: Tag::CallEnd });
    assert_eq!(err.to_string(), "[1,1] : missing CALL_END");
    // The raw tokens were fine; only the rewritten list is unbalanced.
    assert!(scan("@ switch ").is_ok());
}

#[test]
fn object_brace_crossing_a_paren_is_fatal() {
    let err = lex_error("():");
    assert!(
        matches!(err.kind, LexErrorKind::Unmatched { .. }),
        "{err}"
    );
    assert!(scan("():").is_ok());
}

#[test]
fn dedent_below_base_indentation_is_fatal() {
    let err = lex_error("  a\n  b\nc");
    assert_eq!(err.kind, LexErrorKind::MissingIndentation);
    assert_eq!((err.line, err.column), (3, 1));
    assert_eq!(err.to_string(), "[3,1] : missing indentation");
}
