//! Named collections of compiled patterns persisted as one file.
//!
//! Each entry reuses the single-pattern `varint(N) || payload` blob, prefixed
//! by its name. The file carries the compatibility tag of the build that
//! wrote it and a checksum over its body; see [`tokre_format::set`].

use std::io::{Read, Write};

use indexmap::IndexMap;
use log::debug;
use tokre_format::{FormatError, RawEntry, RawSet, check_tag, encode_set, version_tag};

use crate::compile::CompiledPattern;
use crate::{Config, Error, PatternStore};

/// Ordered map from rule name to compiled pattern.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: IndexMap<String, PatternStore>,
    config: Config,
}

impl PatternSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores compiled or loaded through this set use `config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            patterns: IndexMap::new(),
            config,
        }
    }

    /// Compile `pattern` under `name`, replacing any existing entry.
    pub fn compile(&mut self, name: impl Into<String>, pattern: &str) -> Result<(), Error> {
        let mut store = PatternStore::with_config(self.config);
        store.compile(pattern)?;
        self.patterns.insert(name.into(), store);
        Ok(())
    }

    /// Insert an existing store, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, store: PatternStore) -> Option<PatternStore> {
        self.patterns.insert(name.into(), store)
    }

    pub fn get(&self, name: &str) -> Option<&PatternStore> {
        self.patterns.get(name)
    }

    /// Remove an entry, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<PatternStore> {
        self.patterns.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternStore)> {
        self.patterns.iter().map(|(name, store)| (name.as_str(), store))
    }

    /// Encode the whole set. Fails with [`Error::EmptyPattern`] if any entry
    /// holds an empty store.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let payloads = self
            .patterns
            .values()
            .map(|store| {
                store
                    .compiled()
                    .map(CompiledPattern::to_payload)
                    .ok_or(Error::EmptyPattern)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let entries = self
            .patterns
            .keys()
            .zip(&payloads)
            .map(|(name, payload)| RawEntry {
                name: name.as_str(),
                payload: payload.as_slice(),
            });
        let bytes = encode_set(version_tag(), entries)?;
        debug!(
            "encoded pattern set: {} entries, {} bytes",
            self.patterns.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(&self.to_bytes()?)?;
        Ok(())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes_with_config(bytes, Config::default())
    }

    /// Decode a set written by [`to_bytes`](Self::to_bytes).
    ///
    /// The header, checksum and compatibility tag are all verified before any
    /// DFA is reconstructed.
    pub fn from_bytes_with_config(bytes: &[u8], config: Config) -> Result<Self, Error> {
        let raw = RawSet::parse(bytes)?;
        check_tag(raw.tag)?;

        let mut set = Self::with_config(config);
        for entry in raw.entries {
            if set.patterns.contains_key(entry.name) {
                return Err(FormatError::DuplicateName(entry.name.to_string()).into());
            }
            let compiled = CompiledPattern::from_payload(entry.payload)?;
            set.patterns.insert(
                entry.name.to_string(),
                PatternStore::from_compiled(compiled, config),
            );
        }
        debug!("decoded pattern set: {} entries", set.len());
        Ok(set)
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }
}
