//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use tokre::Config;

use super::ColorChoice;
use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::find::FindArgs;
use crate::commands::pattern_loader::PatternSource;
use crate::commands::replace::ReplaceArgs;

/// Limit flags as given. `None` keeps the library default, `Some(0)` lifts
/// the bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LimitParams {
    pub match_limit: Option<usize>,
    pub dfa_size_limit: Option<usize>,
}

impl LimitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            match_limit: m.get_one::<usize>("match_limit").copied(),
            dfa_size_limit: m.get_one::<usize>("dfa_size_limit").copied(),
        }
    }

    pub fn to_config(self) -> Config {
        let mut config = Config::new();
        if let Some(n) = self.match_limit {
            config = config.match_limit(nonzero(n));
        }
        if let Some(n) = self.dfa_size_limit {
            config = config.dfa_size_limit(nonzero(n));
        }
        config
    }
}

fn nonzero(n: usize) -> Option<usize> {
    (n != 0).then_some(n)
}

pub struct CompileParams {
    pub rules_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub output: PathBuf,
    pub limits: LimitParams,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            rules_path: m.get_one::<PathBuf>("rules_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .expect("output is required"),
            limits: LimitParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            rules_path: p.rules_path,
            pattern_text: p.pattern_text,
            output: p.output,
            config: p.limits.to_config(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct FindParams {
    pub source: PatternSource,
    pub inputs: Vec<String>,
    pub json: bool,
    pub limits: LimitParams,
    pub color: ColorChoice,
}

impl FindParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: parse_pattern_source(m),
            inputs: parse_inputs(m),
            json: m.get_flag("json"),
            limits: LimitParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<FindParams> for FindArgs {
    fn from(p: FindParams) -> Self {
        Self {
            source: p.source,
            inputs: p.inputs,
            json: p.json,
            config: p.limits.to_config(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ReplaceParams {
    pub source: PatternSource,
    pub inputs: Vec<String>,
    pub replacement: String,
    pub limits: LimitParams,
    pub color: ColorChoice,
}

impl ReplaceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: parse_pattern_source(m),
            inputs: parse_inputs(m),
            replacement: m
                .get_one::<String>("replacement")
                .cloned()
                .expect("replacement is required"),
            limits: LimitParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<ReplaceParams> for ReplaceArgs {
    fn from(p: ReplaceParams) -> Self {
        Self {
            source: p.source,
            inputs: p.inputs,
            replacement: p.replacement,
            config: p.limits.to_config(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            path: m
                .get_one::<PathBuf>("dump_path")
                .cloned()
                .expect("dump path is required"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            path: p.path,
            color: p.color.should_colorize(),
        }
    }
}

/// The `pattern_source` group guarantees exactly one of these is present.
fn parse_pattern_source(m: &ArgMatches) -> PatternSource {
    if let Some(text) = m.get_one::<String>("pattern_text") {
        return PatternSource::Text(text.clone());
    }
    if let Some(path) = m.get_one::<PathBuf>("blob") {
        return PatternSource::Blob(path.clone());
    }
    let path = m
        .get_one::<PathBuf>("set")
        .cloned()
        .expect("clap requires a pattern source");
    let name = m
        .get_one::<String>("name")
        .cloned()
        .expect("clap requires --name with --set");
    PatternSource::Set { path, name }
}

fn parse_inputs(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
