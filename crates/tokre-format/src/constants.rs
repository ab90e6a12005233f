//! Format constants.

/// Magic bytes identifying a tokre pattern-set file.
pub const MAGIC: [u8; 4] = *b"TKRS";

/// Current pattern-set format version.
pub const VERSION: u32 = 1;

/// Size of the pattern-set header in bytes.
pub const HEADER_SIZE: usize = 32;

/// Identifies the engine that produced the DFA bytes inside a payload.
///
/// Bump whenever the `regex-automata` serialization format changes.
pub const ENGINE_ID: &str = "regex-automata-0.4";

/// Longest valid encoding of a `u64` varint.
pub const MAX_VARINT_LEN: usize = 10;
