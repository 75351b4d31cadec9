//! Property tests over generated programs.
//!
//! Programs are built from a small grammar of calls, conditionals,
//! functions and literals, with and without explicit brackets. For each
//! one the token stream must lex without error, be properly nested, and
//! have a location on every token.

#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use coffee_lexer::{tokenize, Tag, Token};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    prop_oneof![Just("a"), Just("b"), Just("foo"), Just("bar"), Just("x1")].prop_map(String::from)
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier(),
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("'s'".to_owned()),
    ]
}

fn expression() -> impl Strategy<Value = String> {
    atom().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("({e})")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("[{a}, {b}]")),
            (identifier(), inner.clone()).prop_map(|(f, e)| format!("{f}({e})")),
            (identifier(), inner.clone()).prop_map(|(f, e)| format!("{f} {e}")),
            (identifier(), inner.clone(), inner.clone())
                .prop_map(|(f, a, b)| format!("{f} {a}, {b}")),
            inner.prop_map(|e| format!("{{k: {e}}}")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        expression(),
        (identifier(), expression()).prop_map(|(x, e)| format!("{x} = {e}")),
        (expression(), identifier()).prop_map(|(e, c)| format!("{e} if {c}")),
        (identifier(), expression(), expression())
            .prop_map(|(c, a, b)| format!("if {c} then {a} else {b}")),
        (identifier(), expression()).prop_map(|(x, e)| format!("{x} = -> {e}")),
        (identifier(), expression()).prop_map(|(f, e)| format!("{f} k: {e}")),
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => statement(),
        1 => (identifier(), proptest::collection::vec(statement(), 1..3)).prop_map(|(c, body)| {
            let body: Vec<String> = body.iter().map(|s| format!("  {s}")).collect();
            format!("if {c}\n{}", body.join("\n"))
        }),
    ]
}

fn program() -> impl Strategy<Value = String> {
    proptest::collection::vec(line(), 1..5).prop_map(|lines| lines.join("\n"))
}

/// Check that openers and closers nest, returning the first problem.
fn nesting_error(tokens: &[Token]) -> Option<String> {
    let mut open: Vec<Tag> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        if token.tag.is_opener() {
            open.push(token.tag);
        } else if token.tag.is_closer() {
            let expected = open.pop().and_then(Tag::inverse);
            if expected != Some(token.tag) {
                return Some(format!("{} at {i} closes {expected:?}", token.tag));
            }
        }
    }
    open.last().map(|tag| format!("{tag} never closed"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn generated_programs_are_balanced(source in program()) {
        let tokens = match tokenize(&source) {
            Ok(tokens) => tokens,
            Err(err) => return Err(TestCaseError::fail(format!("{source:?}: {err}"))),
        };
        prop_assert_eq!(nesting_error(&tokens), None, "{:?} -> {:?}", source, tokens);
    }

    #[test]
    fn generated_programs_are_located(source in program()) {
        let tokens = match tokenize(&source) {
            Ok(tokens) => tokens,
            Err(err) => return Err(TestCaseError::fail(format!("{source:?}: {err}"))),
        };
        prop_assert!(tokens.iter().all(Token::has_location));
    }

    #[test]
    fn implicit_and_explicit_calls_agree(f in identifier(), a in atom(), b in atom()) {
        let implicit = tokenize(&format!("{f} {a}, {b}"));
        let explicit = tokenize(&format!("{f}({a}, {b})"));
        let tags = |tokens: Result<Vec<Token>, _>| {
            tokens.map(|tokens| tokens.into_iter().map(|token| token.tag).collect::<Vec<_>>())
        };
        prop_assert_eq!(tags(implicit), tags(explicit));
    }
}
