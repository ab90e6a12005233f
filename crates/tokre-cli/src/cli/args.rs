//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Rules file, one `name<TAB>pattern` per line (positional).
pub fn rules_path_arg() -> Arg {
    Arg::new("rules_path")
        .value_name("RULES")
        .value_parser(value_parser!(PathBuf))
        .help("Rules file: one `name<TAB>pattern` per line")
}

/// Inline pattern text (-e/--pattern).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('e')
        .long("pattern")
        .value_name("PATTERN")
        .allow_hyphen_values(true)
        .help("Inline pattern text")
}

/// Single compiled pattern (--blob).
pub fn blob_arg() -> Arg {
    Arg::new("blob")
        .long("blob")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Compiled pattern written by `tokre compile -e`")
}

/// Compiled pattern set (--set).
pub fn set_arg() -> Arg {
    Arg::new("set")
        .long("set")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .requires("name")
        .help("Pattern set written by `tokre compile RULES`")
}

/// Entry to use from a pattern set (--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .long("name")
        .value_name("NAME")
        .requires("set")
        .help("Name of the pattern inside --set")
}

/// Input strings (positional, repeatable). Stdin lines when absent.
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .num_args(0..)
        .help("Input strings (read lines from stdin if none)")
}

/// Replacement text (-r/--replacement).
pub fn replacement_arg() -> Arg {
    Arg::new("replacement")
        .short('r')
        .long("replacement")
        .value_name("TEXT")
        .required(true)
        .allow_hyphen_values(true)
        .help("Literal text substituted for the first match")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Write compiled output to file")
}

/// File to inspect (positional).
pub fn dump_path_arg() -> Arg {
    Arg::new("dump_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Compiled pattern or pattern set")
}

/// Output JSON lines (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output one JSON object per input")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Longest input searched (--match-limit).
pub fn match_limit_arg() -> Arg {
    Arg::new("match_limit")
        .long("match-limit")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Longest input a search will scan, 0 for no limit [default: 65536]")
}

/// DFA size bound at compile time (--dfa-size-limit).
pub fn dfa_size_limit_arg() -> Arg {
    Arg::new("dfa_size_limit")
        .long("dfa-size-limit")
        .value_name("BYTES")
        .value_parser(value_parser!(usize))
        .help("Largest DFA compile may build, 0 for no limit [default: 10485760]")
}
