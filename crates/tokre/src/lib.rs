//! Compile-once, persistable regular expressions for short strings.
//!
//! A [`PatternStore`] owns one compiled pattern. It is compiled from text
//! under a fixed option set (case-insensitive, dot matches newline, extended
//! syntax, UTF-8), or reloaded from the bytes a previous
//! [`PatternStore::serialize`] wrote. The matcher reports the leftmost-longest
//! match and can replace it.
//!
//! ```
//! use tokre::PatternStore;
//!
//! let store = PatternStore::from_pattern("c a t  # extended syntax").unwrap();
//! let bytes = store.to_bytes().unwrap();
//!
//! let reloaded = PatternStore::from_reader(bytes.as_slice()).unwrap();
//! let mut text = String::from("a CAT sat");
//! assert!(reloaded.substitute_first(&mut text, "dog").unwrap());
//! assert_eq!(text, "a dog sat");
//! ```

mod compile;
mod config;
pub mod diagnostics;
mod error;
pub mod matcher;
mod set;
mod store;
mod syntax;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod matcher_tests;
#[cfg(test)]
mod set_tests;
#[cfg(test)]
mod syntax_tests;

pub use compile::parse_pattern;
pub use config::{Config, DEFAULT_DFA_SIZE_LIMIT, DEFAULT_MATCH_LIMIT};
pub use diagnostics::{CompileErrorPrinter, render_compile_error};
pub use error::{CompileError, EngineCode, Error};
pub use matcher::{Span, find, locate, substitute_first};
pub use set::PatternSet;
pub use store::PatternStore;
pub use tokre_format::{FormatError, check_tag, version_tag};
