use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tokre::{Config, PatternSet, PatternStore};

use super::pattern_loader::read_file;
use super::{CliError, fail};

pub struct CompileArgs {
    pub rules_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub output: PathBuf,
    pub config: Config,
    pub color: bool,
}

/// One line of a rules file.
#[derive(Debug, PartialEq, Eq)]
pub struct Rule<'a> {
    pub line: usize,
    pub name: &'a str,
    pub pattern: &'a str,
}

pub fn run(args: CompileArgs) {
    if let Err(e) = execute(&args) {
        fail(e, args.color);
    }
}

fn execute(args: &CompileArgs) -> Result<(), CliError> {
    let bytes = match (&args.pattern_text, &args.rules_path) {
        (Some(text), _) => compile_pattern(text, args.config)?,
        (None, Some(path)) => compile_rules(path, args.config)?,
        (None, None) => unreachable!("clap requires a pattern or rules file"),
    };

    fs::write(&args.output, &bytes).map_err(|source| CliError::Write {
        path: args.output.clone(),
        source,
    })?;
    debug!("wrote {} bytes to '{}'", bytes.len(), args.output.display());
    Ok(())
}

fn compile_pattern(text: &str, config: Config) -> Result<Vec<u8>, CliError> {
    let mut store = PatternStore::with_config(config);
    store
        .compile(text)
        .map_err(|e| CliError::from_tokre(e, text, None))?;
    Ok(store.to_bytes()?)
}

fn compile_rules(path: &Path, config: Config) -> Result<Vec<u8>, CliError> {
    let bytes = read_file(path)?;
    let content = String::from_utf8(bytes).map_err(|e| CliError::Read {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    let origin = path.display().to_string();

    let rules = parse_rules(&content, &origin)?;
    if rules.is_empty() {
        return Err(CliError::NoRules(path.to_path_buf()));
    }

    let mut set = PatternSet::with_config(config);
    for rule in rules {
        set.compile(rule.name, rule.pattern).map_err(|e| {
            CliError::from_tokre(e, rule.pattern, Some(format!("{origin}:{}", rule.line)))
        })?;
    }
    Ok(set.to_bytes()?)
}

/// Split a rules file into `name<TAB>pattern` pairs.
///
/// Blank lines and lines starting with `#` are skipped. A later rule with the
/// same name replaces the earlier one. Line numbers are 1-based.
pub fn parse_rules<'a>(content: &'a str, origin: &str) -> Result<Vec<Rule<'a>>, CliError> {
    let mut rules = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((name, pattern)) = line.split_once('\t') else {
            return Err(CliError::RuleSyntax {
                origin: format!("{origin}:{line_no}"),
            });
        };
        if name.is_empty() {
            return Err(CliError::RuleSyntax {
                origin: format!("{origin}:{line_no}"),
            });
        }
        rules.push(Rule {
            line: line_no,
            name,
            pattern,
        });
    }
    Ok(rules)
}
