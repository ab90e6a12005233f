//! Pattern compilation and the engine-native compiled form.
//!
//! A pattern is parsed once into an `Hir` under a fixed option set, then
//! compiled to two sparse DFAs with `MatchKind::All` semantics:
//!
//! - forward, anchored: from a known start, reports the longest match end.
//! - reverse, unanchored: scanned right to left over the whole input,
//!   reports the leftmost match start.

use log::{debug, trace};
use regex_automata::MatchKind;
use regex_automata::dfa::sparse::DFA;
use regex_automata::dfa::{StartKind, dense};
use regex_automata::nfa::thompson;
use regex_syntax::ParserBuilder;
use regex_syntax::hir::Hir;

use tokre_format::{FormatError, PayloadParts, allocate_payload, deserialize_dfa, payload_len};

use crate::syntax::{self, Rewritten};
use crate::{CompileError, Config};

/// Parse `pattern` with the fixed option set: dot matches newline,
/// case-insensitive, extended (whitespace and `#` comments ignored outside
/// bracket expressions), UTF-8, with ASCII `\d`, `\s`, `\w` and `\b`.
pub fn parse_pattern(pattern: &str) -> Result<Hir, CompileError> {
    let rewritten = syntax::rewrite(pattern);
    if rewritten.text != pattern {
        trace!("rewrote pattern {pattern:?} as {:?}", rewritten.text);
    }
    let hir = ParserBuilder::new()
        .dot_matches_new_line(true)
        .case_insensitive(true)
        .ignore_whitespace(true)
        .unicode(true)
        .utf8(true)
        .build()
        .parse(&rewritten.text)
        .map_err(|e| syntax_error(&rewritten, pattern.len(), &e))?;
    Ok(syntax::ascii_word_boundaries(hir))
}

fn syntax_error(rewritten: &Rewritten, len: usize, err: &regex_syntax::Error) -> CompileError {
    let (message, span) = match err {
        regex_syntax::Error::Parse(e) => (e.kind().to_string(), e.span()),
        regex_syntax::Error::Translate(e) => (e.kind().to_string(), e.span()),
        _ => return CompileError::new(err.to_string(), 0, len),
    };
    CompileError::new(
        message,
        rewritten.origin(span.start.offset),
        rewritten.origin(span.end.offset),
    )
}

/// Engine-native compiled pattern.
#[derive(Clone, Debug)]
pub(crate) struct CompiledPattern {
    forward: DFA<Vec<u8>>,
    reverse: DFA<Vec<u8>>,
}

impl CompiledPattern {
    pub(crate) fn compile(pattern: &str, config: &Config) -> Result<Self, CompileError> {
        let hir = parse_pattern(pattern)?;
        let forward = build_dfa(pattern, &hir, false, config)?;
        let reverse = build_dfa(pattern, &hir, true, config)?;
        debug!(
            "compiled pattern ({} bytes): forward {} bytes, reverse {} bytes",
            pattern.len(),
            forward.write_to_len(),
            reverse.write_to_len()
        );
        Ok(Self { forward, reverse })
    }

    pub(crate) fn forward(&self) -> &DFA<Vec<u8>> {
        &self.forward
    }

    pub(crate) fn reverse(&self) -> &DFA<Vec<u8>> {
        &self.reverse
    }

    /// Exact size of the payload [`to_payload`](Self::to_payload) produces.
    pub(crate) fn payload_len(&self) -> usize {
        payload_len(self.forward.write_to_len(), self.reverse.write_to_len())
    }

    /// Serialize both DFAs in native byte order.
    pub(crate) fn to_payload(&self) -> Vec<u8> {
        let forward_len = self.forward.write_to_len();
        let reverse_len = self.reverse.write_to_len();
        let (mut payload, at) = allocate_payload(forward_len, reverse_len);
        let (forward, reverse) = payload[at..].split_at_mut(forward_len);
        self.forward
            .write_to_native_endian(forward)
            .expect("buffer sized by write_to_len");
        self.reverse
            .write_to_native_endian(reverse)
            .expect("buffer sized by write_to_len");
        payload
    }

    /// Rebuild from a payload without touching the pattern text.
    pub(crate) fn from_payload(payload: &[u8]) -> Result<Self, FormatError> {
        let parts = PayloadParts::split(payload)?;
        let forward = deserialize_dfa(parts.forward)?.to_owned();
        let reverse = deserialize_dfa(parts.reverse)?.to_owned();
        trace!(
            "reconstructed pattern: forward {} bytes, reverse {} bytes",
            parts.forward.len(),
            parts.reverse.len()
        );
        Ok(Self { forward, reverse })
    }
}

fn build_dfa(
    pattern: &str,
    hir: &Hir,
    reverse: bool,
    config: &Config,
) -> Result<DFA<Vec<u8>>, CompileError> {
    let nfa = thompson::Compiler::new()
        .configure(
            thompson::Config::new()
                .reverse(reverse)
                .which_captures(thompson::WhichCaptures::None),
        )
        .build_from_hir(hir)
        .map_err(|e| build_error(pattern, e))?;

    let start_kind = if reverse {
        StartKind::Unanchored
    } else {
        StartKind::Anchored
    };

    let dense = dense::Builder::new()
        .configure(
            dense::Config::new()
                .match_kind(MatchKind::All)
                .start_kind(start_kind)
                .minimize(true)
                .dfa_size_limit(config.get_dfa_size_limit())
                .determinize_size_limit(config.get_determinize_size_limit()),
        )
        .build_from_nfa(&nfa)
        .map_err(|e| build_error(pattern, e))?;

    dense.to_sparse().map_err(|e| build_error(pattern, e))
}

/// DFA construction failures have no position in the pattern; they cover it
/// whole.
fn build_error(pattern: &str, err: impl std::fmt::Display) -> CompileError {
    CompileError::new(err.to_string(), 0, pattern.len())
}
