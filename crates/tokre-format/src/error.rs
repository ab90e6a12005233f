//! Errors raised while decoding persisted patterns.

use std::io;

use crate::VERSION;

/// Malformed, truncated or foreign pattern data.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: u64, actual: u64 },
    #[error("varint overflows 64 bits")]
    VarintOverflow,
    #[error("invalid magic: expected TKRS")]
    InvalidMagic,
    #[error("unsupported version: {0} (expected {VERSION})")]
    UnsupportedVersion(u32),
    #[error("file too small: {0} bytes (minimum 32)")]
    FileTooSmall(usize),
    #[error("size mismatch: header says {header} bytes, got {actual}")]
    SizeMismatch { header: u32, actual: usize },
    #[error("checksum mismatch: header says {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
    #[error("incompatible engine tag: expected {expected:?}, found {found:?}")]
    TagMismatch { expected: String, found: String },
    #[error("invalid DFA: {0}")]
    InvalidDfa(String),
    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),
    #[error("entry name is not valid UTF-8")]
    InvalidName,
    #[error("duplicate entry name: {0:?}")]
    DuplicateName(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl FormatError {
    /// Whether the error came from the underlying reader/writer rather than
    /// from the bytes themselves.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
