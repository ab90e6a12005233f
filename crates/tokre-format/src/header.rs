//! Pattern-set file header (32 bytes).

use super::{HEADER_SIZE, MAGIC, VERSION};

/// File header - first 32 bytes of a pattern-set file.
///
/// Layout (little endian):
/// - 0-3: magic
/// - 4-7: format version
/// - 8-11: CRC32 of everything after the header
/// - 12-15: total file size
/// - 16-19: number of entries
/// - 20-31: reserved
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Magic bytes: b"TKRS"
    pub magic: [u8; 4],
    pub version: u32,
    pub checksum: u32,
    pub total_size: u32,
    pub entry_count: u32,
    pub _reserved: [u8; 12],
}

impl Default for Header {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            checksum: 0,
            total_size: 0,
            entry_count: 0,
            _reserved: [0; 12],
        }
    }
}

impl Header {
    /// Decode header from 32 bytes.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Self {
        let mut reserved = [0u8; 12];
        reserved.copy_from_slice(&bytes[20..32]);

        Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: read_u32_le(bytes, 4),
            checksum: read_u32_le(bytes, 8),
            total_size: read_u32_le(bytes, 12),
            entry_count: read_u32_le(bytes, 16),
            _reserved: reserved,
        }
    }

    /// Encode header to 32 bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.checksum.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.total_size.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.entry_count.to_le_bytes());
        bytes[20..32].copy_from_slice(&self._reserved);
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }
}

#[inline]
fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
