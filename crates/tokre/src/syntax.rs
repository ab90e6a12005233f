//! Pattern-text rewrites applied before `regex_syntax` sees a pattern.
//!
//! Patterns follow Perl's extended mode over byte-oriented shorthands:
//!
//! - inside a bracket expression, whitespace and `#` are literal, and `[` is
//!   literal unless it opens a POSIX class such as `[:alpha:]`
//! - `\d`, `\s`, `\w` and their negations are ASCII classes
//!
//! `regex_syntax` skips whitespace and comments inside classes too, nests
//! classes, and reads the shorthands as Unicode classes. The rewrite escapes
//! the former and spells the shorthands as POSIX classes. Every byte of the
//! output records the pattern offset it came from, so parse errors still
//! point into the text the user wrote.
//!
//! Word boundaries are handled after parsing by [`ascii_word_boundaries`].

use std::iter::Peekable;
use std::str::CharIndices;

use regex_syntax::hir::{Hir, HirKind, Look};

/// Rewritten pattern text plus an offset map back into the original.
#[derive(Debug)]
pub(crate) struct Rewritten {
    pub(crate) text: String,
    origin: Vec<usize>,
}

impl Rewritten {
    /// Original pattern offset for a byte offset into [`text`](Self::text).
    pub(crate) fn origin(&self, offset: usize) -> usize {
        let last = self.origin.len() - 1;
        self.origin[offset.min(last)]
    }
}

pub(crate) fn rewrite(pattern: &str) -> Rewritten {
    let mut w = Rewriter {
        pattern,
        chars: pattern.char_indices().peekable(),
        text: String::with_capacity(pattern.len()),
        origin: Vec::with_capacity(pattern.len() + 1),
    };
    w.top_level();
    w.origin.push(pattern.len());
    Rewritten {
        text: w.text,
        origin: w.origin,
    }
}

struct Rewriter<'p> {
    pattern: &'p str,
    chars: Peekable<CharIndices<'p>>,
    text: String,
    origin: Vec<usize>,
}

impl Rewriter<'_> {
    fn push(&mut self, at: usize, s: &str) {
        self.text.push_str(s);
        self.origin.extend(std::iter::repeat_n(at, s.len()));
    }

    fn push_char(&mut self, at: usize, c: char) {
        self.text.push(c);
        self.origin.extend(std::iter::repeat_n(at, c.len_utf8()));
    }

    fn top_level(&mut self) {
        while let Some((at, c)) = self.chars.next() {
            match c {
                '\\' => self.escape(at, false),
                '[' => self.class(at),
                '#' => {
                    self.push_char(at, c);
                    self.comment();
                }
                _ => self.push_char(at, c),
            }
        }
    }

    /// Copy a `#` comment through the end of its line.
    fn comment(&mut self) {
        while let Some((at, c)) = self.chars.next() {
            self.push_char(at, c);
            if c == '\n' {
                return;
            }
        }
    }

    fn escape(&mut self, at: usize, in_class: bool) {
        let Some((next_at, next)) = self.chars.next() else {
            self.push(at, "\\");
            return;
        };
        let name = match next.to_ascii_lowercase() {
            'd' => "digit",
            's' => "space",
            'w' => "word",
            _ => {
                self.push(at, "\\");
                self.push_char(next_at, next);
                return;
            }
        };
        let negate = if next.is_ascii_uppercase() { "^" } else { "" };
        let class = if in_class {
            format!("[:{negate}{name}:]")
        } else {
            format!("[[:{negate}{name}:]]")
        };
        self.push(at, &class);
    }

    fn class(&mut self, at: usize) {
        self.push(at, "[");
        if let Some((at, c)) = self.chars.next_if(|&(_, c)| c == '^') {
            self.push_char(at, c);
        }
        // A leading `]` is a member, not the end.
        if let Some((at, _)) = self.chars.next_if(|&(_, c)| c == ']') {
            self.push(at, "\\]");
        }

        while let Some((at, c)) = self.chars.next() {
            match c {
                ']' => {
                    self.push(at, "]");
                    return;
                }
                '\\' => self.escape(at, true),
                '[' => match posix_class_len(&self.pattern[at..]) {
                    Some(len) => self.posix(at, len),
                    None => self.push(at, "\\["),
                },
                '#' | '&' | '~' => {
                    self.push(at, "\\");
                    self.push_char(at, c);
                }
                '-' if self.chars.peek().is_some_and(|&(_, n)| n == '-') => {
                    self.push(at, "\\-");
                }
                c if c.is_whitespace() => self.push(at, &format!("\\x{{{:X}}}", c as u32)),
                c => self.push_char(at, c),
            }
        }
    }

    /// Copy a POSIX class of `len` bytes starting at the `[` already taken.
    fn posix(&mut self, at: usize, len: usize) {
        self.push(at, "[");
        let end = at + len;
        while let Some((at, c)) = self.chars.next_if(|&(i, _)| i < end) {
            self.push_char(at, c);
        }
    }
}

/// Length of a `[:name:]` or `[:^name:]` class at the start of `rest`.
fn posix_class_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix("[:")?;
    let name_end = body.find(":]")?;
    let name = &body[..name_end];
    let name = name.strip_prefix('^').unwrap_or(name);
    let valid = !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase());
    valid.then_some(2 + name_end + 2)
}

/// Replace Unicode word-boundary assertions with their ASCII forms.
///
/// A DFA cannot evaluate a Unicode word boundary next to a non-ASCII byte
/// and gives up on it; ASCII boundaries are exact.
pub(crate) fn ascii_word_boundaries(hir: Hir) -> Hir {
    match hir.into_kind() {
        HirKind::Empty => Hir::empty(),
        HirKind::Literal(lit) => Hir::literal(lit.0),
        HirKind::Class(class) => Hir::class(class),
        HirKind::Look(look) => Hir::look(ascii_look(look)),
        HirKind::Repetition(mut rep) => {
            rep.sub = Box::new(ascii_word_boundaries(*rep.sub));
            Hir::repetition(rep)
        }
        HirKind::Capture(mut cap) => {
            cap.sub = Box::new(ascii_word_boundaries(*cap.sub));
            Hir::capture(cap)
        }
        HirKind::Concat(subs) => Hir::concat(subs.into_iter().map(ascii_word_boundaries).collect()),
        HirKind::Alternation(subs) => {
            Hir::alternation(subs.into_iter().map(ascii_word_boundaries).collect())
        }
    }
}

fn ascii_look(look: Look) -> Look {
    match look {
        Look::WordUnicode => Look::WordAscii,
        Look::WordUnicodeNegate => Look::WordAsciiNegate,
        Look::WordStartUnicode => Look::WordStartAscii,
        Look::WordEndUnicode => Look::WordEndAscii,
        Look::WordStartHalfUnicode => Look::WordStartHalfAscii,
        Look::WordEndHalfUnicode => Look::WordEndHalfAscii,
        other => other,
    }
}
