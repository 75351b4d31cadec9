use super::*;

// === Keyword lookup ===

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup("if"), Some(Tag::If));
    assert_eq!(lookup("unless"), Some(Tag::If));
    assert_eq!(lookup("else"), Some(Tag::Else));
    assert_eq!(lookup("for"), Some(Tag::For));
    assert_eq!(lookup("while"), Some(Tag::While));
    assert_eq!(lookup("until"), Some(Tag::Until));
    assert_eq!(lookup("loop"), Some(Tag::Loop));
    assert_eq!(lookup("switch"), Some(Tag::Switch));
    assert_eq!(lookup("when"), Some(Tag::When));
    assert_eq!(lookup("then"), Some(Tag::Then));
    assert_eq!(lookup("return"), Some(Tag::Return));
}

#[test]
fn statement_words() {
    assert_eq!(lookup("break"), Some(Tag::Statement));
    assert_eq!(lookup("continue"), Some(Tag::Statement));
    assert_eq!(lookup("debugger"), Some(Tag::Debugger));
}

#[test]
fn operator_words() {
    for word in ["new", "delete", "typeof", "do", "not"] {
        assert_eq!(lookup(word), Some(Tag::Unary), "{word}");
    }
    for word in ["in", "of", "instanceof"] {
        assert_eq!(lookup(word), Some(Tag::Relation), "{word}");
    }
    assert_eq!(lookup("and"), Some(Tag::Logic));
    assert_eq!(lookup("or"), Some(Tag::Logic));
    assert_eq!(lookup("is"), Some(Tag::Compare));
    assert_eq!(lookup("isnt"), Some(Tag::Compare));
}

#[test]
fn value_words() {
    for word in ["true", "false", "yes", "no", "on", "off"] {
        assert_eq!(lookup(word), Some(Tag::Bool), "{word}");
    }
    assert_eq!(lookup("null"), Some(Tag::Null));
    assert_eq!(lookup("undefined"), Some(Tag::Undefined));
    assert_eq!(lookup("this"), Some(Tag::This));
    assert_eq!(lookup("super"), Some(Tag::Super));
}

#[test]
fn non_keywords() {
    for word in ["", "x", "foo", "If", "own", "var", "function", "arguments", "instanceofx"] {
        assert_eq!(lookup(word), None, "{word}");
    }
}

// === Aliases ===

#[test]
fn alias_spellings() {
    assert_eq!(alias("and"), Some("&&"));
    assert_eq!(alias("or"), Some("||"));
    assert_eq!(alias("is"), Some("=="));
    assert_eq!(alias("isnt"), Some("!="));
    assert_eq!(alias("not"), Some("!"));
    assert_eq!(alias("yes"), Some("true"));
    assert_eq!(alias("on"), Some("true"));
    assert_eq!(alias("no"), Some("false"));
    assert_eq!(alias("off"), Some("false"));
    assert_eq!(alias("true"), None);
}

#[test]
fn every_alias_is_a_keyword() {
    for word in ["and", "or", "is", "isnt", "not", "yes", "no", "on", "off"] {
        assert!(lookup(word).is_some(), "{word}");
    }
}

// === Reserved words ===

#[test]
fn reserved_words() {
    for word in ["var", "function", "let", "const", "yield", "__extends", "static"] {
        assert!(is_reserved(word), "{word}");
        assert!(is_js_forbidden(word), "{word}");
    }
    assert!(!is_reserved("if"));
}

#[test]
fn forbidden_words() {
    for word in ["if", "class", "instanceof", "arguments", "eval"] {
        assert!(is_js_forbidden(word), "{word}");
    }
    for word in ["then", "unless", "and", "foo"] {
        assert!(!is_js_forbidden(word), "{word}");
    }
}
