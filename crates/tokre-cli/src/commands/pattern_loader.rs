use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tokre::{Config, PatternSet, PatternStore};

use super::CliError;

/// Where `find` and `replace` get their pattern from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSource {
    /// Compiled on the spot from `-e`.
    Text(String),
    /// A single-pattern file.
    Blob(PathBuf),
    /// One entry of a pattern-set file.
    Set { path: PathBuf, name: String },
}

pub fn load_pattern(source: &PatternSource, config: Config) -> Result<PatternStore, CliError> {
    match source {
        PatternSource::Text(text) => {
            let mut store = PatternStore::with_config(config);
            store
                .compile(text)
                .map_err(|e| CliError::from_tokre(e, text, None))?;
            Ok(store)
        }
        PatternSource::Blob(path) => {
            let bytes = read_file(path)?;
            let mut store = PatternStore::with_config(config);
            store.deserialize(bytes.as_slice())?;
            debug!("loaded pattern from '{}'", path.display());
            Ok(store)
        }
        PatternSource::Set { path, name } => {
            let bytes = read_file(path)?;
            let mut set = PatternSet::from_bytes_with_config(&bytes, config)?;
            debug!("loaded {} patterns from '{}'", set.len(), path.display());
            set.remove(name)
                .ok_or_else(|| CliError::UnknownName(name.clone()))
        }
    }
}

pub fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
