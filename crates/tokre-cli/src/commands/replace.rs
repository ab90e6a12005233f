use tokre::{Config, PatternStore};

use super::input::load_inputs;
use super::pattern_loader::{PatternSource, load_pattern};
use super::{CliError, fail};

pub struct ReplaceArgs {
    pub source: PatternSource,
    pub inputs: Vec<String>,
    pub replacement: String,
    pub config: Config,
    pub color: bool,
}

pub fn run(args: ReplaceArgs) {
    let color = args.color;
    if let Err(e) = execute(args) {
        fail(e, color);
    }
}

fn execute(args: ReplaceArgs) -> Result<(), CliError> {
    let store = load_pattern(&args.source, args.config)?;
    for input in load_inputs(args.inputs)? {
        println!("{}", replace_line(&store, input, &args.replacement)?);
    }
    Ok(())
}

/// `input` with its first match replaced, or unchanged when nothing matches.
pub fn replace_line(
    store: &PatternStore,
    mut input: String,
    replacement: &str,
) -> Result<String, CliError> {
    store.substitute_first(&mut input, replacement)?;
    Ok(input)
}
