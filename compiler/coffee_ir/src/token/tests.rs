use super::*;
use pretty_assertions::assert_eq;

// === Tag ===

#[test]
fn tag_names_match_grammar_terminals() {
    assert_eq!(Tag::Identifier.as_str(), "IDENTIFIER");
    assert_eq!(Tag::CallStart.as_str(), "CALL_START");
    assert_eq!(Tag::PostIf.as_str(), "POST_IF");
    assert_eq!(Tag::ForIn.as_str(), "FORIN");
    assert_eq!(Tag::SoakPrototype.as_str(), "?::");
    assert_eq!(Tag::Backslash.as_str(), "\\");
    assert_eq!(Tag::LParen.to_string(), "(");
}

#[test]
fn inverse_pairs_are_symmetric() {
    let openers = [
        Tag::LParen,
        Tag::LBracket,
        Tag::LBrace,
        Tag::Indent,
        Tag::CallStart,
        Tag::ParamStart,
        Tag::IndexStart,
    ];
    for opener in openers {
        assert!(opener.is_opener());
        let Some(closer) = opener.inverse() else {
            panic!("{opener} has no inverse");
        };
        assert!(closer.is_closer(), "{closer} should be a closer");
        assert_eq!(closer.inverse(), Some(opener));
    }
}

#[test]
fn specific_inverse_pairs() {
    assert_eq!(Tag::LParen.inverse(), Some(Tag::RParen));
    assert_eq!(Tag::CallStart.inverse(), Some(Tag::CallEnd));
    assert_eq!(Tag::IndexStart.inverse(), Some(Tag::IndexEnd));
    assert_eq!(Tag::Indent.inverse(), Some(Tag::Outdent));
    assert_eq!(Tag::Terminator.inverse(), None);
    assert_eq!(Tag::IndexSoak.inverse(), None);
}

// === TagSet ===

#[test]
fn tag_set_membership() {
    const LINE_BREAK: TagSet = TagSet::of(&[Tag::Indent, Tag::Outdent, Tag::Terminator]);
    assert!(LINE_BREAK.contains(Tag::Indent));
    assert!(LINE_BREAK.contains(Tag::Terminator));
    assert!(!LINE_BREAK.contains(Tag::Comma));
}

#[test]
fn tag_set_union() {
    let set = TagSet::of(&[Tag::Backslash, Tag::Identifier]);
    let merged = set.union(TagSet::of(&[Tag::Number]));
    assert!(merged.contains(Tag::Backslash));
    assert!(merged.contains(Tag::Identifier));
    assert!(merged.contains(Tag::Number));
    assert!(!set.contains(Tag::Number));
    assert!(!TagSet::default().contains(Tag::Number));
}

#[test]
fn tag_set_optional_lookup() {
    let set = TagSet::of(&[Tag::Comma]);
    assert!(set.contains_opt(Some(Tag::Comma)));
    assert!(!set.contains_opt(Some(Tag::Dot)));
    assert!(!set.contains_opt(None));
}

// === Token ===

#[test]
fn source_token_has_location() {
    let token = Token::new(Tag::Number, "42", Span::new(0, 0, 0, 1));
    assert!(token.has_location());
    assert!(!token.is_generated());
    assert!(!token.is_explicit());
    assert!(token.is(Tag::Number));
}

#[test]
fn generated_token_has_no_location() {
    let origin = Span::point(2, 4);
    let token = Token::generated(Tag::CallStart, "(", Some(origin));
    assert!(!token.has_location());
    assert!(token.is_generated());
    assert_eq!(token.origin, Some(origin));
}

#[test]
fn explicit_token_flags() {
    let token = Token::explicit(Tag::Indent, "2");
    assert!(token.is_explicit());
    assert!(!token.is_generated());
    assert!(token.span.is_none());
}

#[test]
fn layout_flags() {
    let mut token = Token::dummy(Tag::Identifier, "a");
    assert!(!token.spaced());
    token.flags |= TokenFlags::SPACED | TokenFlags::NEW_LINE;
    assert!(token.spaced());
    assert!(token.new_line());
    assert!(!token.is_reserved());
}

#[test]
fn debug_format() {
    let token = Token::new(Tag::Identifier, "x", Span::new(0, 0, 0, 0));
    assert_eq!(format!("{token:?}"), "IDENTIFIER \"x\" @ 0:0-0:0");
    let generated = Token::generated(Tag::CallEnd, ")", None);
    assert_eq!(
        format!("{generated:?}"),
        "CALL_END \")\" TokenFlags(GENERATED)"
    );
}
