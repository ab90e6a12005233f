//! Error types for compiling, persisting and matching patterns.

use std::fmt;
use std::io;
use std::ops::Range;

use regex_automata::{MatchError, MatchErrorKind};
use tokre_format::FormatError;

/// A pattern failed to parse or to compile into DFAs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} (at offset {offset})")]
pub struct CompileError {
    pub message: String,
    /// Byte offset into the pattern text where compilation failed.
    pub offset: usize,
    /// End of the offending region, for diagnostics.
    pub end: usize,
}

impl CompileError {
    pub fn new(message: impl Into<String>, offset: usize, end: usize) -> Self {
        Self {
            message: message.into(),
            offset,
            end: end.max(offset),
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.offset..self.end
    }
}

/// Failure reported by the regex engine during a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineCode {
    /// The DFA stopped on a byte it cannot handle (e.g. non-ASCII input
    /// with a Unicode word boundary).
    Quit,
    GaveUp,
    /// Input exceeded the configured match limit.
    HaystackTooLong,
    UnsupportedAnchored,
    Unknown,
}

impl EngineCode {
    pub fn of(err: &MatchError) -> Self {
        match err.kind() {
            MatchErrorKind::Quit { .. } => Self::Quit,
            MatchErrorKind::GaveUp { .. } => Self::GaveUp,
            MatchErrorKind::HaystackTooLong { .. } => Self::HaystackTooLong,
            MatchErrorKind::UnsupportedAnchored { .. } => Self::UnsupportedAnchored,
            _ => Self::Unknown,
        }
    }

    /// Stable numeric code for hosts that log integers.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Quit => -1,
            Self::GaveUp => -2,
            Self::HaystackTooLong => -3,
            Self::UnsupportedAnchored => -4,
            Self::Unknown => -99,
        }
    }
}

impl fmt::Display for EngineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quit => "quit",
            Self::GaveUp => "gave up",
            Self::HaystackTooLong => "haystack too long",
            Self::UnsupportedAnchored => "unsupported anchored",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}, code {}", self.as_i32())
    }
}

/// Errors surfaced by [`PatternStore`](crate::PatternStore) and
/// [`PatternSet`](crate::PatternSet).
///
/// "No match" and matching against an empty store are not errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid pattern: {0}")]
    Compile(#[from] CompileError),
    #[error("corrupt pattern data: {0}")]
    CorruptData(FormatError),
    #[error("cannot serialize an empty pattern")]
    EmptyPattern,
    #[error("regex engine error ({code}): {source}")]
    Engine { code: EngineCode, source: MatchError },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptData(_))
    }

    /// Engine status code, if this is an engine error.
    pub fn engine_code(&self) -> Option<EngineCode> {
        match self {
            Self::Engine { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Io(e) => Self::Io(e),
            other => Self::CorruptData(other),
        }
    }
}

impl From<MatchError> for Error {
    fn from(source: MatchError) -> Self {
        Self::Engine {
            code: EngineCode::of(&source),
            source,
        }
    }
}
