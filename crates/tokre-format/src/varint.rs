//! Variable-length unsigned integers.
//!
//! Unsigned LEB128: each byte carries 7 bits of magnitude, least significant
//! group first, with the high bit set on every byte except the last.

use std::io::{self, Read, Write};

use crate::{FormatError, MAX_VARINT_LEN};

/// Number of bytes `value` occupies once encoded.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Encode `value` into a fresh buffer.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_len(value));
    push_varint(&mut out, value);
    out
}

/// Append the encoding of `value` to `out`.
pub fn push_varint(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Write `value` to `w`.
pub fn write_varint<W: Write>(w: &mut W, value: u64) -> io::Result<()> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    push_varint(&mut buf, value);
    w.write_all(&buf)
}

/// Read a varint from `r`.
///
/// End of input in the middle of a varint is reported as
/// [`FormatError::Truncated`]; encodings longer than ten bytes or exceeding
/// `u64::MAX` as [`FormatError::VarintOverflow`].
pub fn read_varint<R: Read>(r: &mut R) -> Result<u64, FormatError> {
    let mut value: u64 = 0;
    for i in 0..MAX_VARINT_LEN {
        let mut byte = [0u8; 1];
        if let Err(e) = r.read_exact(&mut byte) {
            return Err(match e.kind() {
                io::ErrorKind::UnexpectedEof => FormatError::Truncated {
                    expected: i as u64 + 1,
                    actual: i as u64,
                },
                _ => FormatError::Io(e),
            });
        }
        let group = u64::from(byte[0] & 0x7F);
        let shift = 7 * i as u32;
        // The tenth byte may only contribute the single remaining bit.
        if i == MAX_VARINT_LEN - 1 && group > 1 {
            return Err(FormatError::VarintOverflow);
        }
        value |= group << shift;
        if byte[0] & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(FormatError::VarintOverflow)
}

/// Decode a varint from the front of `bytes`, returning the value and the
/// number of bytes consumed.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize), FormatError> {
    let mut cursor = bytes;
    let value = read_varint(&mut cursor)?;
    Ok((value, bytes.len() - cursor.len()))
}
