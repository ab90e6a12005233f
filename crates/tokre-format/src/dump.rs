//! Human-readable dump of persisted patterns.
//!
//! Only the container structure is decoded; DFA bytes are reported by size.

use std::fmt::Write as _;

use crate::blob::split_blob;
use crate::colors::Colors;
use crate::payload::PayloadParts;
use crate::set::RawSet;
use crate::tag::version_tag;
use crate::FormatError;

/// Dump a pattern-set file.
pub fn dump_set(bytes: &[u8], colors: Colors) -> Result<String, FormatError> {
    let set = RawSet::parse(bytes)?;
    let c = &colors;
    let mut out = String::new();

    let (tag_color, verdict) = if set.tag == version_tag() {
        (c.green, "compatible")
    } else {
        (c.red, "foreign")
    };

    writeln!(out, "{}[header]{}", c.blue, c.reset).unwrap();
    let magic = String::from_utf8_lossy(&set.header.magic);
    writeln!(out, "{}magic{}     {magic}", c.dim, c.reset).unwrap();
    writeln!(out, "{}version{}   {}", c.dim, c.reset, set.header.version).unwrap();
    writeln!(out, "{}size{}      {}", c.dim, c.reset, set.header.total_size).unwrap();
    writeln!(
        out,
        "{}checksum{}  {:#010x}",
        c.dim, c.reset, set.header.checksum
    )
    .unwrap();
    writeln!(
        out,
        "{}tag{}       {tag_color}{:?}{} ({verdict})",
        c.dim, c.reset, set.tag, c.reset
    )
    .unwrap();
    out.push('\n');

    let w = width_for_count(set.entries.len());
    writeln!(out, "{}[entries]{}", c.blue, c.reset).unwrap();
    for (i, entry) in set.entries.iter().enumerate() {
        write!(out, "E{i:0w$} {}{:?}{} ", c.green, entry.name, c.reset).unwrap();
        match PayloadParts::split(entry.payload) {
            Ok(parts) => writeln!(
                out,
                "{}payload{} {} {}forward{} {} {}reverse{} {}",
                c.dim,
                c.reset,
                entry.payload.len(),
                c.dim,
                c.reset,
                parts.forward.len(),
                c.dim,
                c.reset,
                parts.reverse.len()
            )
            .unwrap(),
            Err(e) => writeln!(
                out,
                "{}payload{} {} {}invalid: {e}{}",
                c.dim,
                c.reset,
                entry.payload.len(),
                c.red,
                c.reset
            )
            .unwrap(),
        }
    }

    Ok(out)
}

/// Dump a single length-prefixed pattern blob.
pub fn dump_pattern(bytes: &[u8], colors: Colors) -> Result<String, FormatError> {
    let (payload, used) = split_blob(bytes)?;
    if used != bytes.len() {
        return Err(FormatError::TrailingBytes(bytes.len() - used));
    }
    let parts = PayloadParts::split(payload)?;
    let c = &colors;
    let mut out = String::new();

    writeln!(out, "{}[pattern]{}", c.blue, c.reset).unwrap();
    writeln!(out, "{}payload{}  {}", c.dim, c.reset, payload.len()).unwrap();
    writeln!(out, "{}forward{}  {}", c.dim, c.reset, parts.forward.len()).unwrap();
    writeln!(out, "{}reverse{}  {}", c.dim, c.reset, parts.reverse.len()).unwrap();
    Ok(out)
}

/// Number of decimal digits needed to print indices below `count`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}
