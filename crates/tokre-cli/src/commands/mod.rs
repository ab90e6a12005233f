pub mod compile;
pub mod dump;
pub mod find;
pub mod input;
pub mod pattern_loader;
pub mod replace;
pub mod tag;


use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokre::CompileError;

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("{origin}: expected `name<TAB>pattern`")]
    RuleSyntax { origin: String },

    #[error("rules file '{}' defines no patterns", .0.display())]
    NoRules(PathBuf),

    #[error("no pattern named '{0}' in set")]
    UnknownName(String),

    /// A pattern that failed to compile, with enough context to point at it.
    #[error("{error}")]
    Pattern {
        pattern: String,
        origin: Option<String>,
        error: CompileError,
    },

    #[error(transparent)]
    Tokre(#[from] tokre::Error),

    #[error(transparent)]
    Format(#[from] tokre_format::FormatError),
}

impl CliError {
    /// Attach the pattern text to a compile failure so it can be rendered.
    pub fn from_tokre(err: tokre::Error, pattern: &str, origin: Option<String>) -> Self {
        match err {
            tokre::Error::Compile(error) => CliError::Pattern {
                pattern: pattern.to_string(),
                origin,
                error,
            },
            other => CliError::Tokre(other),
        }
    }

    /// Text printed to stderr for this error.
    pub fn render(&self, color: bool) -> String {
        match self {
            CliError::Pattern {
                pattern,
                origin,
                error,
            } => {
                let printer = error.printer().pattern(pattern).colored(color);
                match origin {
                    Some(origin) => printer.path(origin).render(),
                    None => printer.render(),
                }
            }
            other => format!("error: {other}\n"),
        }
    }
}

/// Print `err` and exit with status 1.
pub fn fail(err: CliError, color: bool) -> ! {
    eprint!("{}", err.render(color));
    std::process::exit(1);
}
