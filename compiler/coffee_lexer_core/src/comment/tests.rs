use super::*;
use pretty_assertions::assert_eq;

// === Block comments ===

#[test]
fn block_comment_body() {
    assert_eq!(
        comment("### doc ###\nx"),
        Some(Comment::Block {
            len: 11,
            body: 3..8,
        })
    );
}

#[test]
fn block_comment_eats_trailing_horizontal_whitespace() {
    let Some(Comment::Block { len, .. }) = comment("###a###  \t\nx") else {
        panic!("expected a block comment");
    };
    assert_eq!(len, 10);
}

#[test]
fn block_comment_spans_lines() {
    let src = "###\nline one\nline two\n###";
    assert_eq!(
        comment(src),
        Some(Comment::Block {
            len: src.len(),
            body: 3..src.len() - 3,
        })
    );
}

#[test]
fn block_comment_closer_directly_after_first_char() {
    assert_eq!(
        comment("###a####"),
        Some(Comment::Block { len: 7, body: 3..4 })
    );
}

#[test]
fn block_opener_detection() {
    assert!(starts_block_comment("### x"));
    assert!(starts_block_comment("###\n"));
    assert!(!starts_block_comment("####"));
    assert!(!starts_block_comment("###"));
    assert!(!starts_block_comment("## x"));
}

#[test]
fn unterminated_block_is_not_a_comment() {
    assert_eq!(comment("### never closed"), None);
}

// === Line comments ===

#[test]
fn single_line_comment() {
    assert_eq!(comment("# note\nx"), Some(Comment::Line { len: 6 }));
    assert_eq!(comment("# note"), Some(Comment::Line { len: 6 }));
}

#[test]
fn consecutive_line_comments_merge() {
    let src = "# one\n  # two\n\n# three\nx";
    assert_eq!(
        comment(src),
        Some(Comment::Line {
            len: src.len() - 2
        })
    );
}

#[test]
fn leading_whitespace_is_included() {
    assert_eq!(comment("  \n  # x\ny"), Some(Comment::Line { len: 8 }));
}

#[test]
fn hash_runs_are_line_comments() {
    assert_eq!(comment("####\nx"), Some(Comment::Line { len: 4 }));
    assert_eq!(comment("###"), Some(Comment::Line { len: 3 }));
}

#[test]
fn line_comments_stop_before_block() {
    assert_eq!(comment("# a\n###b###"), Some(Comment::Line { len: 3 }));
}

#[test]
fn whitespace_without_hash_is_not_a_comment() {
    assert_eq!(comment("  x"), None);
    assert_eq!(comment("\n\n"), None);
    assert_eq!(comment(""), None);
}
