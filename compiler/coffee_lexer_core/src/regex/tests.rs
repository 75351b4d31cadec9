use super::*;
use pretty_assertions::assert_eq;

// === Single-line regexes ===

#[test]
fn simple_regex() {
    assert_eq!(
        regex("/ab+c/ x"),
        Some(RegexMatch {
            len: 6,
            body: 1..5,
            flags: 6..6,
        })
    );
}

#[test]
fn regex_with_flags() {
    assert_eq!(
        regex("/a/gi.test"),
        Some(RegexMatch {
            len: 5,
            body: 1..2,
            flags: 3..5,
        })
    );
}

#[test]
fn flags_followed_by_word_reject() {
    assert_eq!(regex("/a/gx"), None);
    assert_eq!(regex("/a/imgyi"), None);
    assert_eq!(regex("/a/2"), None);
}

#[test]
fn escaped_slash_and_class() {
    let Some(found) = regex(r"/a\/b/") else {
        panic!("expected escaped slash to match");
    };
    assert_eq!(found.len, 6);

    let Some(found) = regex("/[/]x/") else {
        panic!("expected slash in class to match");
    };
    assert_eq!(found.len, 6);

    let Some(found) = regex(r"/[\]]/") else {
        panic!("expected escaped bracket in class to match");
    };
    assert_eq!(found.len, 6);
}

#[test]
fn opener_rules() {
    assert_eq!(regex("/ a/"), None);
    assert_eq!(regex("/=a/"), None);
    assert_eq!(regex("a/"), None);
    assert_eq!(regex("/"), None);
}

#[test]
fn newline_ends_attempt() {
    assert_eq!(regex("/a\nb/"), None);
    assert_eq!(regex("/[a\n]/"), None);
}

#[test]
fn empty_body_matches() {
    assert_eq!(
        regex("// comment"),
        Some(RegexMatch {
            len: 2,
            body: 1..1,
            flags: 2..2,
        })
    );
}

#[test]
fn unterminated_regex() {
    assert_eq!(regex("/abc"), None);
    assert_eq!(regex("/[abc/"), None);
}

// === Block regexes ===

#[test]
fn heregex_basic() {
    assert_eq!(
        heregex("///a b///g;"),
        Some(RegexMatch {
            len: 10,
            body: 3..6,
            flags: 9..10,
        })
    );
}

#[test]
fn heregex_multiline() {
    let src = "///\n  \\d+ # digits\n///";
    let Some(found) = heregex(src) else {
        panic!("expected heregex");
    };
    assert_eq!(found.len, src.len());
    assert_eq!(&src[found.body], "\n  \\d+ # digits\n");
}

#[test]
fn heregex_extends_past_bad_flags() {
    let src = "///a///x///";
    let Some(found) = heregex(src) else {
        panic!("expected heregex");
    };
    assert_eq!(&src[found.body], "a///x");
    assert_eq!(found.len, src.len());
}

#[test]
fn heregex_needs_non_empty_body() {
    assert_eq!(heregex("//////"), None);
    assert_eq!(
        heregex("///////"),
        Some(RegexMatch {
            len: 7,
            body: 3..4,
            flags: 7..7,
        })
    );
}

#[test]
fn heregex_unterminated() {
    assert_eq!(heregex("///abc//"), None);
    assert_eq!(heregex("//a//"), None);
}

#[test]
fn heregex_escaped_slash_before_closer() {
    let src = "///a\\////";
    let Some(found) = heregex(src) else {
        panic!("expected heregex");
    };
    assert_eq!(&src[found.body], "a\\/");
    assert_eq!(found.len, src.len());
}

#[test]
fn heregex_backslash_alone_when_escape_cannot_close() {
    let src = "///a\\///";
    let Some(found) = heregex(src) else {
        panic!("expected heregex");
    };
    assert_eq!(&src[found.body], "a\\");
    assert_eq!(found.len, src.len());
}
