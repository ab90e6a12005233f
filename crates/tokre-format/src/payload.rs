//! Compiled-pattern payload layout.
//!
//! The payload stored inside a blob holds two serialized sparse DFAs:
//!
//! ```text
//! varint(forward_len) || forward[forward_len] || reverse[..]
//! ```
//!
//! The forward DFA is anchored and finds the longest end from a known start.
//! The reverse DFA is unanchored and finds the leftmost start.

use crate::FormatError;
use crate::varint::{decode_varint, push_varint, varint_len};

/// Borrowed view of the two DFAs inside a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadParts<'a> {
    pub forward: &'a [u8],
    pub reverse: &'a [u8],
}

impl<'a> PayloadParts<'a> {
    /// Split a payload into its forward and reverse DFA bytes.
    pub fn split(payload: &'a [u8]) -> Result<Self, FormatError> {
        let (forward_len, prefix) = decode_varint(payload)?;
        let rest = &payload[prefix..];
        if forward_len > rest.len() as u64 {
            return Err(FormatError::Truncated {
                expected: forward_len,
                actual: rest.len() as u64,
            });
        }
        let (forward, reverse) = rest.split_at(forward_len as usize);
        Ok(Self { forward, reverse })
    }
}

/// Total payload size for DFAs of the given serialized lengths.
pub fn payload_len(forward_len: usize, reverse_len: usize) -> usize {
    varint_len(forward_len as u64) + forward_len + reverse_len
}

/// Lay out a payload buffer, leaving zeroed slots for both DFAs.
///
/// Returns the buffer and the offset at which the forward DFA starts; the
/// reverse DFA follows immediately after it.
pub fn allocate_payload(forward_len: usize, reverse_len: usize) -> (Vec<u8>, usize) {
    let mut payload = Vec::with_capacity(payload_len(forward_len, reverse_len));
    push_varint(&mut payload, forward_len as u64);
    let forward_at = payload.len();
    payload.resize(forward_at + forward_len + reverse_len, 0);
    (payload, forward_at)
}
