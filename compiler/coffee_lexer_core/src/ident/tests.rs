use super::*;
use pretty_assertions::assert_eq;

fn plain(len: usize) -> Option<IdentMatch> {
    Some(IdentMatch {
        ident_len: len,
        colon: None,
        len,
    })
}

#[test]
fn simple_identifiers() {
    assert_eq!(identifier("foo bar"), plain(3));
    assert_eq!(identifier("$el"), plain(3));
    assert_eq!(identifier("_x1 = 2"), plain(3));
    assert_eq!(identifier("a.b"), plain(1));
}

#[test]
fn rejects_non_identifier_start() {
    assert_eq!(identifier("1abc"), None);
    assert_eq!(identifier(" a"), None);
    assert_eq!(identifier(""), None);
    assert_eq!(identifier("@a"), None);
}

#[test]
fn non_ascii_identifiers() {
    assert_eq!(identifier("café = 1"), plain("café".len()));
    assert_eq!(identifier("ünïcødé"), plain("ünïcødé".len()));
}

#[test]
fn key_colon() {
    assert_eq!(
        identifier("a: 1"),
        Some(IdentMatch {
            ident_len: 1,
            colon: Some(1),
            len: 2,
        })
    );
    assert_eq!(
        identifier("key \t: value"),
        Some(IdentMatch {
            ident_len: 3,
            colon: Some(5),
            len: 6,
        })
    );
}

#[test]
fn prototype_colons_are_not_a_key() {
    assert_eq!(identifier("a::b"), plain(1));
    assert_eq!(identifier("a ::b"), plain(1));
}

#[test]
fn colon_on_next_line_is_not_a_key() {
    assert_eq!(identifier("a\n: 1"), plain(1));
}
