use regex_syntax::hir::{HirKind, Look};

use crate::syntax::{ascii_word_boundaries, rewrite};

#[test]
fn plain_patterns_pass_through() {
    for pattern in ["abc", "a b # comment\nc", r"\.\(", "(?i)x{2,3}"] {
        assert_eq!(rewrite(pattern).text, pattern);
    }
}

#[test]
fn bracket_members_are_escaped() {
    assert_eq!(rewrite("[a b]").text, r"[a\x{20}b]");
    assert_eq!(rewrite("[^#]").text, r"[^\#]");
    assert_eq!(rewrite("[]a]").text, r"[\]a]");
    assert_eq!(rewrite("[a[b]").text, r"[a\[b]");
    assert_eq!(rewrite("[a&&b]").text, r"[a\&\&b]");
    assert_eq!(rewrite("[a--b]").text, r"[a\--b]");
}

#[test]
fn posix_classes_are_kept() {
    assert_eq!(rewrite("[[:alpha:]_]").text, "[[:alpha:]_]");
    assert_eq!(rewrite("[[:^space:]]").text, "[[:^space:]]");
}

#[test]
fn shorthands_become_posix_classes() {
    assert_eq!(rewrite(r"\w+").text, "[[:word:]]+");
    assert_eq!(rewrite(r"\S").text, "[[:^space:]]");
    assert_eq!(rewrite(r"[\d.]").text, "[[:digit:].]");
    assert_eq!(rewrite(r"[^\W]").text, "[^[:^word:]]");
}

#[test]
fn shorthands_stay_in_comments() {
    assert_eq!(rewrite("a # \\w [ ]\nb").text, "a # \\w [ ]\nb");
}

#[test]
fn origin_maps_each_byte() {
    let rewritten = rewrite(r"x\dy");
    let y = rewritten.text.find('y').unwrap();
    assert_eq!(rewritten.origin(y), 3);
    assert_eq!(rewritten.origin(2), 1);
    assert_eq!(rewritten.origin(rewritten.text.len()), 4);
    assert_eq!(rewritten.origin(usize::MAX), 4);
}

#[test]
fn word_boundaries_become_ascii() {
    let hir = regex_syntax::parse(r"\b(?:a|\B)").unwrap();
    let hir = ascii_word_boundaries(hir);

    let HirKind::Concat(subs) = hir.kind() else {
        panic!("expected concat, got {hir:?}");
    };
    assert_eq!(subs[0].kind(), &HirKind::Look(Look::WordAscii));
    let HirKind::Alternation(alts) = subs[1].kind() else {
        panic!("expected alternation, got {:?}", subs[1]);
    };
    assert_eq!(alts[1].kind(), &HirKind::Look(Look::WordAsciiNegate));
}
