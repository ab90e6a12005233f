//! Binary format for persisted tokre patterns.
//!
//! This crate contains:
//! - Varint and length-prefixed blob primitives
//! - The compiled-pattern payload layout and DFA deserialization
//! - The engine/endianness compatibility tag
//! - The pattern-set container (header, checksum, entries) and its dump

pub mod blob;
pub mod colors;
mod constants;
pub mod dfa;
pub mod dump;
mod error;
pub mod header;
pub mod payload;
pub mod set;
pub mod tag;
pub mod varint;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod varint_tests;

pub use blob::{read_blob, split_blob, write_blob};
pub use colors::Colors;
pub use constants::{ENGINE_ID, HEADER_SIZE, MAGIC, MAX_VARINT_LEN, VERSION};
pub use dfa::deserialize_dfa;
pub use dump::{dump_pattern, dump_set};
pub use error::FormatError;
pub use header::Header;
pub use payload::{PayloadParts, allocate_payload, payload_len};
pub use set::{RawEntry, RawSet, encode_set, is_set};
pub use tag::{check_tag, version_tag};
pub use varint::{decode_varint, encode_varint, read_varint, varint_len, write_varint};
