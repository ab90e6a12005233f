//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `find` and `replace` take exactly one pattern source out of `-e`,
//! `--blob` and `--set`.

use clap::{ArgGroup, Command};

use super::args::*;

/// Add the pattern-source args and the group that makes one of them required.
fn with_pattern_source(cmd: Command) -> Command {
    cmd.arg(pattern_text_arg())
        .arg(blob_arg())
        .arg(set_arg())
        .arg(name_arg())
        .group(
            ArgGroup::new("pattern_source")
                .args(["pattern_text", "blob", "set"])
                .required(true)
                .multiple(false),
        )
}

/// Add the resource limit args.
fn with_limits(cmd: Command) -> Command {
    cmd.arg(match_limit_arg()).arg(dfa_size_limit_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tokre")
        .about("Compile, persist and apply regular expressions over short strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(find_command())
        .subcommand(replace_command())
        .subcommand(dump_command())
        .subcommand(tag_command())
}

/// Compile a pattern or a rules file to disk.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a pattern or a rules file")
        .override_usage(
            "\
  tokre compile -e <PATTERN> -o <FILE>
  tokre compile <RULES> -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  tokre compile -e '(ito|ita)s?$' -o dim.tkr    # single pattern
  tokre compile rules.tsv -o rules.tks         # named set, name<TAB>pattern"#,
        )
        .arg(rules_path_arg())
        .arg(pattern_text_arg())
        .arg(output_file_arg())
        .arg(color_arg())
        .group(
            ArgGroup::new("compile_source")
                .args(["rules_path", "pattern_text"])
                .required(true)
                .multiple(false),
        );

    with_limits(cmd)
}

/// Report the first match in each input.
pub fn find_command() -> Command {
    let cmd = Command::new("find")
        .about("Report the leftmost-longest match in each input")
        .override_usage(
            "\
  tokre find -e <PATTERN> [INPUT]...
  tokre find --blob <FILE> [INPUT]...
  tokre find --set <FILE> --name <NAME> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  tokre find -e 'colou?r' Colour colr     # inline pattern
  tokre find --blob dim.tkr < words.txt   # one input per stdin line
  tokre find --set rules.tks --name plural --json gatos"#,
        )
        .arg(inputs_arg())
        .arg(json_arg())
        .arg(color_arg());

    with_limits(with_pattern_source(cmd))
}

/// Replace the first match in each input.
pub fn replace_command() -> Command {
    let cmd = Command::new("replace")
        .about("Replace the first match in each input")
        .override_usage(
            "\
  tokre replace -e <PATTERN> -r <TEXT> [INPUT]...
  tokre replace --blob <FILE> -r <TEXT> [INPUT]...
  tokre replace --set <FILE> --name <NAME> -r <TEXT> [INPUT]...",
        )
        .after_help(
            r#"EXAMPLES:
  tokre replace -e 's$' -r '' gatos perros          # strip plural
  tokre replace --blob dim.tkr -r o < words.txt"#,
        )
        .arg(inputs_arg())
        .arg(replacement_arg())
        .arg(color_arg());

    with_limits(with_pattern_source(cmd))
}

/// Show the structure of a compiled file.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the structure of a compiled pattern or set")
        .after_help(
            r#"EXAMPLES:
  tokre dump rules.tks                # header, tag and entries
  tokre dump dim.tkr --color never"#,
        )
        .arg(dump_path_arg())
        .arg(color_arg())
}

/// Print the compatibility tag of this build.
pub fn tag_command() -> Command {
    Command::new("tag").about("Print the compatibility tag written into compiled files")
}
