use std::io::{self, BufRead};

use super::CliError;

/// Inputs given on the command line, or one per stdin line when there are none.
pub fn load_inputs(inputs: Vec<String>) -> Result<Vec<String>, CliError> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }
    read_lines(io::stdin().lock())
}

/// Lines of `reader` without their terminators.
pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, CliError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(CliError::Stdin)
}
