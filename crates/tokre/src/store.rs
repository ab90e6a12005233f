//! Ownership of a single compiled pattern.

use std::io::{Read, Write};

use log::debug;
use tokre_format::{check_tag, read_blob, varint_len, write_blob};

use crate::compile::CompiledPattern;
use crate::matcher::{self, Span};
use crate::{Config, Error};

/// Owns one compiled pattern slot.
///
/// A store starts empty and becomes ready through [`compile`](Self::compile)
/// or [`deserialize`](Self::deserialize). Matching an empty store reports no
/// match; serializing it fails with [`Error::EmptyPattern`].
///
/// Calling `compile` or `deserialize` on a ready store replaces the compiled
/// form; the previous one is dropped. A failed call leaves the store as it
/// was.
#[derive(Debug, Default)]
pub struct PatternStore {
    compiled: Option<CompiledPattern>,
    config: Config,
}

impl PatternStore {
    /// An empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            compiled: None,
            config,
        }
    }

    /// Compile `pattern` into a new store.
    pub fn from_pattern(pattern: &str) -> Result<Self, Error> {
        let mut store = Self::new();
        store.compile(pattern)?;
        Ok(store)
    }

    /// Read one persisted pattern into a new store.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut store = Self::new();
        store.deserialize(reader)?;
        Ok(store)
    }

    pub(crate) fn from_compiled(compiled: CompiledPattern, config: Config) -> Self {
        Self {
            compiled: Some(compiled),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.compiled.is_some()
    }

    pub(crate) fn compiled(&self) -> Option<&CompiledPattern> {
        self.compiled.as_ref()
    }

    /// Compile `pattern` and make the store ready.
    pub fn compile(&mut self, pattern: &str) -> Result<(), Error> {
        let compiled = CompiledPattern::compile(pattern, &self.config)?;
        self.install(compiled);
        Ok(())
    }

    /// Read `varint(N) || payload[N]` and rebuild the compiled form from the
    /// payload without recompiling.
    pub fn deserialize<R: Read>(&mut self, mut reader: R) -> Result<(), Error> {
        let payload = read_blob(&mut reader)?;
        let compiled = CompiledPattern::from_payload(&payload)?;
        debug!("deserialized pattern payload ({} bytes)", payload.len());
        self.install(compiled);
        Ok(())
    }

    /// Like [`deserialize`](Self::deserialize), but first checks the
    /// compatibility tag the host recorded when the pattern was written.
    ///
    /// Nothing is read from `reader` when the tag does not match.
    pub fn deserialize_tagged<R: Read>(&mut self, tag: &str, reader: R) -> Result<(), Error> {
        check_tag(tag)?;
        self.deserialize(reader)
    }

    /// Write `varint(N) || payload[N]`.
    pub fn serialize<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let compiled = self.compiled.as_ref().ok_or(Error::EmptyPattern)?;
        let payload = compiled.to_payload();
        write_blob(&mut writer, &payload)?;
        debug!("serialized pattern payload ({} bytes)", payload.len());
        Ok(())
    }

    /// Serialize into a fresh buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let compiled = self.compiled.as_ref().ok_or(Error::EmptyPattern)?;
        let payload_len = compiled.payload_len();
        let mut out = Vec::with_capacity(varint_len(payload_len as u64) + payload_len);
        self.serialize(&mut out)?;
        Ok(out)
    }

    /// See [`matcher::locate`].
    pub fn locate(&self, input: &str) -> Result<Option<Span>, Error> {
        matcher::locate(self, input)
    }

    /// See [`matcher::find`].
    pub fn find<'h>(&self, input: &'h str) -> Result<Option<&'h str>, Error> {
        matcher::find(self, input)
    }

    /// See [`matcher::substitute_first`].
    pub fn substitute_first(&self, input: &mut String, replacement: &str) -> Result<bool, Error> {
        matcher::substitute_first(self, input, replacement)
    }

    fn install(&mut self, compiled: CompiledPattern) {
        if self.compiled.replace(compiled).is_some() {
            debug!("replaced previously compiled pattern");
        }
    }
}
