//! Comment placement.
//!
//! Comment lines are matched to top-level items by index: the comment on source line
//! `n` is emitted before the `n`-th top-level binding, whatever line that binding is
//! on. Comments past the last binding index trail the output. The cases below pin
//! that behavior, including where it misplaces comments.

use crate::common::convert;
use tarrow_babel::transforms::translate_with_rules;
use tarrow_babel::RenderRules;

#[test]
fn comment_on_first_line_precedes_first_binding() {
    assert_eq!(convert("# top\na = 1\nb = 2"), "\" top\n1 -> a\n2 -> b");
}

#[test]
fn repeated_hashes_are_stripped() {
    assert_eq!(convert("### banner\na = 1"), "\" banner\n1 -> a");
}

#[test]
fn comment_after_blank_line_is_moved_to_the_end() {
    // The comment above `b` is on line 3, but only two items exist (indices 0 and 1),
    // so it is emitted after every binding instead of before `b`.
    assert_eq!(
        convert("# about a\na = 1\n\n# about b\nb = 2"),
        "\" about a\n1 -> a\n2 -> b\n\" about b"
    );
}

#[test]
fn comment_attaches_by_index_not_by_line() {
    // The comment sits right above `b` (line 1), and item `b` has index 1, so the two
    // happen to line up.
    assert_eq!(convert("a = 1\n# about b\nb = 2"), "1 -> a\n\" about b\n2 -> b");
}

#[test]
fn comments_inside_tables_are_misplaced() {
    let source = "[t]\n# inside t\nx = 1\n";
    // Only one top-level item (index 0) exists; the comment on line 1 trails.
    assert_eq!(convert(source), "([\n    x : 1,\n]) -> t\n\" inside t");
}

#[test]
fn trailing_comments_are_kept_in_order() {
    assert_eq!(
        convert("a = 1\n\n# one\n# two\n"),
        "1 -> a\n\" one\n\" two"
    );
}

#[test]
fn inline_trailing_comments_are_dropped() {
    assert_eq!(convert("a = 1 # not a comment line"), "1 -> a");
}

#[test]
fn comments_can_be_disabled() {
    let rules = RenderRules {
        preserve_comments: false,
        ..Default::default()
    };
    let output = translate_with_rules("# hidden\na = 1\n# hidden too", rules).unwrap();
    assert_eq!(output, "1 -> a");
}
