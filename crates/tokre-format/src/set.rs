//! Pattern-set container layout.
//!
//! ```text
//! Header (32 bytes)
//! varint(tag_len) tag
//! entry_count × ( varint(name_len) name  varint(N) payload[N] )
//! ```
//!
//! The CRC32 in the header covers every byte after it.

use crate::blob::split_blob;
use crate::header::Header;
use crate::varint::push_varint;
use crate::{FormatError, HEADER_SIZE};

/// One named payload borrowed from a pattern-set file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub name: &'a str,
    pub payload: &'a [u8],
}

/// A structurally valid pattern-set file.
///
/// Parsing checks size, magic, version, total size and checksum. The
/// compatibility tag is returned as-is; callers that intend to load the DFAs
/// must check it.
#[derive(Clone, Debug)]
pub struct RawSet<'a> {
    pub header: Header,
    pub tag: &'a str,
    pub entries: Vec<RawEntry<'a>>,
}

impl<'a> RawSet<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self, FormatError> {
        let header = check_header(bytes)?;
        let body = &bytes[HEADER_SIZE..];

        let (tag, mut at) = split_blob(body)?;
        let tag = std::str::from_utf8(tag).map_err(|_| FormatError::InvalidName)?;

        let mut entries = Vec::with_capacity((header.entry_count as usize).min(body.len()));
        for _ in 0..header.entry_count {
            let (name, used) = split_blob(&body[at..])?;
            at += used;
            let name = std::str::from_utf8(name).map_err(|_| FormatError::InvalidName)?;
            let (payload, used) = split_blob(&body[at..])?;
            at += used;
            entries.push(RawEntry { name, payload });
        }

        if at != body.len() {
            return Err(FormatError::TrailingBytes(body.len() - at));
        }

        Ok(Self {
            header,
            tag,
            entries,
        })
    }
}

/// Validate the header of a pattern-set file against the bytes it describes.
pub fn check_header(bytes: &[u8]) -> Result<Header, FormatError> {
    let Some(head) = bytes.first_chunk::<HEADER_SIZE>() else {
        return Err(FormatError::FileTooSmall(bytes.len()));
    };
    let header = Header::from_bytes(head);

    if !header.validate_magic() {
        return Err(FormatError::InvalidMagic);
    }
    if !header.validate_version() {
        return Err(FormatError::UnsupportedVersion(header.version));
    }
    if header.total_size as usize != bytes.len() {
        return Err(FormatError::SizeMismatch {
            header: header.total_size,
            actual: bytes.len(),
        });
    }
    let actual = crc32fast::hash(&bytes[HEADER_SIZE..]);
    if actual != header.checksum {
        return Err(FormatError::ChecksumMismatch {
            expected: header.checksum,
            actual,
        });
    }
    Ok(header)
}

/// Whether `bytes` starts like a pattern-set file.
pub fn is_set(bytes: &[u8]) -> bool {
    bytes.starts_with(&crate::MAGIC)
}

/// Encode a complete pattern-set file.
pub fn encode_set<'e>(
    tag: &str,
    entries: impl IntoIterator<Item = RawEntry<'e>>,
) -> Result<Vec<u8>, FormatError> {
    let mut out = vec![0u8; HEADER_SIZE];
    push_varint(&mut out, tag.len() as u64);
    out.extend_from_slice(tag.as_bytes());

    let mut entry_count: u32 = 0;
    for entry in entries {
        push_varint(&mut out, entry.name.len() as u64);
        out.extend_from_slice(entry.name.as_bytes());
        push_varint(&mut out, entry.payload.len() as u64);
        out.extend_from_slice(entry.payload);
        entry_count += 1;
    }

    let total_size = u32::try_from(out.len()).map_err(|_| FormatError::SizeMismatch {
        header: u32::MAX,
        actual: out.len(),
    })?;

    let header = Header {
        checksum: crc32fast::hash(&out[HEADER_SIZE..]),
        total_size,
        entry_count,
        ..Header::default()
    };
    out[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
    Ok(out)
}
