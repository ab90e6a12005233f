//! DFA deserialization for persisted patterns.

use regex_automata::dfa::sparse::DFA;

use crate::FormatError;

/// Deserialize a sparse DFA, requiring the slice to hold exactly one DFA.
///
/// `DFA::from_bytes` validates the endianness marker, format version and
/// every transition, so foreign or corrupt bytes are rejected rather than
/// misread.
pub fn deserialize_dfa(bytes: &[u8]) -> Result<DFA<&[u8]>, FormatError> {
    let (dfa, read) =
        DFA::from_bytes(bytes).map_err(|e| FormatError::InvalidDfa(e.to_string()))?;
    if read != bytes.len() {
        return Err(FormatError::TrailingBytes(bytes.len() - read));
    }
    Ok(dfa)
}
