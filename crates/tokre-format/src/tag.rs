//! Compatibility tag for persisted DFAs.
//!
//! DFA bytes are only meaningful to the engine build and byte order that
//! wrote them. Hosts record [`version_tag`] next to persisted patterns and
//! compare it with [`check_tag`] before handing the bytes back.

use std::sync::OnceLock;

use crate::{ENGINE_ID, FormatError};

#[cfg(target_endian = "little")]
const ENDIAN_SUFFIX: &str = "le";
#[cfg(target_endian = "big")]
const ENDIAN_SUFFIX: &str = "be";

/// Engine identifier plus the byte order of this build, e.g.
/// `regex-automata-0.4-le`.
pub fn version_tag() -> &'static str {
    static TAG: OnceLock<String> = OnceLock::new();
    TAG.get_or_init(|| format!("{ENGINE_ID}-{ENDIAN_SUFFIX}"))
}

/// Reject data written by an incompatible build.
pub fn check_tag(found: &str) -> Result<(), FormatError> {
    let expected = version_tag();
    if found == expected {
        return Ok(());
    }
    Err(FormatError::TagMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
    })
}
