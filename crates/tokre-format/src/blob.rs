//! Length-prefixed pattern blobs.
//!
//! A blob is `varint(N) || payload[N]`. Containers embed blobs verbatim and
//! are responsible for any markers around them.

use std::io::{Read, Write};

use crate::varint::{read_varint, write_varint};
use crate::FormatError;

/// Write `payload` with its length prefix.
pub fn write_blob<W: Write>(w: &mut W, payload: &[u8]) -> Result<(), FormatError> {
    write_varint(w, payload.len() as u64)?;
    w.write_all(payload)?;
    Ok(())
}

/// Read one blob, returning exactly the declared number of payload bytes.
///
/// The declared length is untrusted: bytes are pulled through
/// [`Read::take`] so a corrupt prefix cannot trigger a huge allocation.
pub fn read_blob<R: Read>(r: &mut R) -> Result<Vec<u8>, FormatError> {
    let expected = read_varint(r)?;
    let mut payload = Vec::new();
    let actual = r.by_ref().take(expected).read_to_end(&mut payload)? as u64;
    if actual != expected {
        return Err(FormatError::Truncated { expected, actual });
    }
    Ok(payload)
}

/// Borrow one blob from the front of `bytes`, returning the payload and the
/// total number of bytes consumed (prefix included).
pub fn split_blob(bytes: &[u8]) -> Result<(&[u8], usize), FormatError> {
    let mut cursor = bytes;
    let expected = read_varint(&mut cursor)?;
    let prefix = bytes.len() - cursor.len();
    let available = cursor.len() as u64;
    if available < expected {
        return Err(FormatError::Truncated {
            expected,
            actual: available,
        });
    }
    let len = expected as usize;
    Ok((&cursor[..len], prefix + len))
}
