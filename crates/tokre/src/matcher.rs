//! First-match search and replacement.
//!
//! Matches are leftmost-longest: among all matches the one with the
//! smallest start wins, and among those the longest.

use std::ops::Range;

use log::trace;
use regex_automata::dfa::Automaton;
use regex_automata::{Anchored, Input, MatchError};

use crate::compile::CompiledPattern;
use crate::{Error, PatternStore};

/// Half-open byte range `[start, end)` of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start after end");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

/// Locate the first match of `store`'s pattern in `input`.
///
/// An empty store never matches.
pub fn locate(store: &PatternStore, input: &str) -> Result<Option<Span>, Error> {
    let Some(compiled) = store.compiled() else {
        return Ok(None);
    };
    if let Some(limit) = store.config().get_match_limit()
        && input.len() > limit
    {
        return Err(MatchError::haystack_too_long(input.len()).into());
    }
    Ok(leftmost_longest(compiled, input)?)
}

/// The text of the first match.
pub fn find<'h>(store: &PatternStore, input: &'h str) -> Result<Option<&'h str>, Error> {
    Ok(locate(store, input)?.map(|span| &input[span.range()]))
}

/// Replace the first match in `input` with `replacement`.
///
/// Returns `false`, leaving `input` untouched, when the store is empty or
/// nothing matches.
pub fn substitute_first(
    store: &PatternStore,
    input: &mut String,
    replacement: &str,
) -> Result<bool, Error> {
    let Some(span) = locate(store, input)? else {
        return Ok(false);
    };
    trace!("replacing {}..{} of {} bytes", span.start, span.end, input.len());
    input.replace_range(span.range(), replacement);
    Ok(true)
}

fn leftmost_longest(
    compiled: &CompiledPattern,
    haystack: &str,
) -> Result<Option<Span>, MatchError> {
    let mut from = 0;
    loop {
        // Right to left over the rest of the input: the last match state seen
        // is the smallest start offset.
        let input = Input::new(haystack).range(from..);
        let Some(start) = compiled.reverse().try_search_rev(&input)? else {
            return Ok(None);
        };
        let start = start.offset();

        // Only an empty ASCII word-boundary match can land inside a character.
        if !haystack.is_char_boundary(start) {
            from = (start + 1..=haystack.len())
                .find(|&i| haystack.is_char_boundary(i))
                .unwrap_or(haystack.len());
            continue;
        }

        let input = Input::new(haystack).range(start..).anchored(Anchored::Yes);
        let end = compiled.forward().try_search_fwd(&input)?;
        return Ok(end.map(|end| Span::new(start, end.offset())));
    }
}
