use std::path::PathBuf;

use tokre_format::{Colors, dump_pattern, dump_set, is_set};

use super::pattern_loader::read_file;
use super::{CliError, fail};

pub struct DumpArgs {
    pub path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    match render(&args) {
        Ok(text) => print!("{text}"),
        Err(e) => fail(e, args.color),
    }
}

fn render(args: &DumpArgs) -> Result<String, CliError> {
    let bytes = read_file(&args.path)?;
    let colors = Colors::new(args.color);
    let text = if is_set(&bytes) {
        dump_set(&bytes, colors)?
    } else {
        dump_pattern(&bytes, colors)?
    };
    Ok(text)
}
