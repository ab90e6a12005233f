use super::*;

fn store(pattern: &str) -> PatternStore {
    PatternStore::from_pattern(pattern).unwrap()
}

fn span(start: usize, end: usize) -> Option<Span> {
    Some(Span::new(start, end))
}

#[test]
fn first_match_only() {
    let s = store("abc");
    assert_eq!(s.locate("abcabc").unwrap(), span(0, 3));

    let mut text = String::from("abcabc");
    assert!(s.substitute_first(&mut text, "X").unwrap());
    assert_eq!(text, "Xabc");
}

#[test]
fn no_match_passthrough() {
    let s = store("xyz");
    assert_eq!(s.locate("hello").unwrap(), None);

    let mut text = String::from("hello");
    assert!(!s.substitute_first(&mut text, "X").unwrap());
    assert_eq!(text, "hello");
}

#[test]
fn case_insensitive() {
    let s = store("CAT");
    assert_eq!(s.locate("a cat sat").unwrap(), span(2, 5));
    assert_eq!(s.find("a cAt sat").unwrap(), Some("cAt"));
}

#[test]
fn leftmost_wins_over_earlier_alternative() {
    let s = store("sat|cat");
    assert_eq!(s.locate("a cat sat").unwrap(), span(2, 5));
}

#[test]
fn longest_at_leftmost_start() {
    let s = store("a|ab|abc");
    assert_eq!(s.locate("xxabcd").unwrap(), span(2, 5));

    let s = store("a+");
    assert_eq!(s.locate("baaab").unwrap(), span(1, 4));
}

#[test]
fn extended_syntax_ignores_whitespace_and_comments() {
    let s = store("c a t   # the animal");
    assert_eq!(s.locate("concatenate").unwrap(), span(3, 6));
    assert_eq!(s.locate("c a t").unwrap(), None);

    let s = store(r"c \  a");
    assert_eq!(s.locate("c a").unwrap(), span(0, 3));
}

#[test]
fn dot_matches_newline() {
    let s = store("a.b");
    assert_eq!(s.locate("xa\nb").unwrap(), span(1, 4));
}

#[test]
fn spans_are_byte_offsets_on_char_boundaries() {
    let s = store("ñu");
    assert_eq!(s.locate("el ÑU").unwrap(), span(3, 6));

    let s = store(".");
    assert_eq!(s.locate("écrit").unwrap(), span(0, 2));

    let mut text = String::from("año nuevo");
    assert!(store("ñ").substitute_first(&mut text, "nn").unwrap());
    assert_eq!(text, "anno nuevo");
}

#[test]
fn empty_match_at_start() {
    let s = store("x*");
    assert_eq!(s.locate("abc").unwrap(), span(0, 0));

    let mut text = String::from("abc");
    assert!(s.substitute_first(&mut text, "<").unwrap());
    assert_eq!(text, "<abc");
}

#[test]
fn anchors() {
    let s = store("^ab");
    assert_eq!(s.locate("abab").unwrap(), span(0, 2));
    assert_eq!(s.locate("cab").unwrap(), None);

    let s = store("ab$");
    assert_eq!(s.locate("abab").unwrap(), span(2, 4));
}

#[test]
fn replacement_can_grow_and_shrink() {
    let s = store("ll+");
    let mut text = String::from("hello");
    assert!(s.substitute_first(&mut text, "").unwrap());
    assert_eq!(text, "heo");

    let mut text = String::from("hello");
    assert!(s.substitute_first(&mut text, "LLLL").unwrap());
    assert_eq!(text, "heLLLLo");
}

#[test]
fn empty_store_never_matches() {
    let s = PatternStore::new();
    for input in ["", "abc", "ñ"] {
        assert_eq!(s.locate(input).unwrap(), None);
        assert_eq!(s.find(input).unwrap(), None);

        let mut text = input.to_string();
        assert!(!s.substitute_first(&mut text, "X").unwrap());
        assert_eq!(text, input);
    }
}

#[test]
fn match_limit_is_engine_error() {
    let mut s = PatternStore::with_config(Config::new().match_limit(Some(4)));
    s.compile("b").unwrap();

    assert_eq!(s.locate("abcd").unwrap(), span(1, 2));

    let err = s.locate("abcde").unwrap_err();
    assert_eq!(err.engine_code(), Some(EngineCode::HaystackTooLong));
    assert_eq!(EngineCode::HaystackTooLong.as_i32(), -3);

    let mut text = String::from("abcde");
    assert!(s.substitute_first(&mut text, "X").is_err());
    assert_eq!(text, "abcde");
}

#[test]
fn unlimited_match_limit() {
    let mut s = PatternStore::with_config(Config::new().match_limit(None));
    s.compile("z").unwrap();
    let long = "a".repeat(DEFAULT_MATCH_LIMIT * 2) + "z";
    assert_eq!(s.locate(&long).unwrap(), span(long.len() - 1, long.len()));
}

#[test]
fn word_boundary_is_ascii() {
    let s = store(r"\bcat\b");
    assert_eq!(s.locate("a cat sat").unwrap(), span(2, 5));
    assert_eq!(s.locate("concat").unwrap(), None);
    assert_eq!(s.locate("señor cat").unwrap(), span(7, 10));

    assert_eq!(store(r"\bde\b").locate("años de").unwrap(), span(6, 8));
}

#[test]
fn empty_match_never_splits_a_character() {
    // Between the two bytes of `ñ` is a non-boundary too.
    assert_eq!(store(r"\B").locate("añ").unwrap(), span(3, 3));
}

#[test]
fn bracket_whitespace_is_literal() {
    assert_eq!(store("[^ ]+").locate("x y").unwrap(), span(0, 1));
    assert_eq!(store("[a b]").locate("x y").unwrap(), span(1, 2));
    assert_eq!(store("[#]").locate("a#b").unwrap(), span(1, 2));
    assert_eq!(store("a b # trailing comment").locate("xab").unwrap(), span(1, 3));
}

#[test]
fn shorthand_classes_are_ascii() {
    assert_eq!(store(r"\w+").locate("señor").unwrap(), span(0, 2));
    assert_eq!(store(r"\d+").locate("x١23").unwrap(), span(3, 5));
    assert_eq!(store(r"[\w-]+").locate("foo-bar baz").unwrap(), span(0, 7));
    assert_eq!(store(r"\W").locate("añ").unwrap(), span(1, 3));
    assert_eq!(store(r"[[:alpha:]]+").locate("12ab3").unwrap(), span(2, 4));
}

#[test]
fn span_helpers() {
    let sp = Span::new(2, 5);
    assert_eq!(sp.len(), 3);
    assert!(!sp.is_empty());
    assert_eq!(std::ops::Range::from(sp), 2..5);
    assert!(Span::new(4, 4).is_empty());
}

#[test]
fn concurrent_searches_share_one_store() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PatternStore>();

    let s = store("n[aeiou]+");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(s.locate("banana").unwrap(), span(2, 4));
                }
            });
        }
    });
}
