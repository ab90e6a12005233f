use serde::Serialize;
use tokre::{Config, PatternStore, Span};

use super::input::load_inputs;
use super::pattern_loader::{PatternSource, load_pattern};
use super::{CliError, fail};

pub struct FindArgs {
    pub source: PatternSource,
    pub inputs: Vec<String>,
    pub json: bool,
    pub config: Config,
    pub color: bool,
}

/// One `--json` output line.
#[derive(Debug, Serialize)]
pub struct FindRecord<'a> {
    pub input: &'a str,
    #[serde(rename = "match")]
    pub found: Option<MatchRecord<'a>>,
}

#[derive(Debug, Serialize)]
pub struct MatchRecord<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl<'a> FindRecord<'a> {
    pub fn new(input: &'a str, span: Option<Span>) -> Self {
        Self {
            input,
            found: span.map(|span| MatchRecord {
                start: span.start,
                end: span.end,
                text: &input[span.range()],
            }),
        }
    }
}

pub fn run(args: FindArgs) {
    let color = args.color;
    if let Err(e) = execute(args) {
        fail(e, color);
    }
}

fn execute(args: FindArgs) -> Result<(), CliError> {
    let store = load_pattern(&args.source, args.config)?;
    for input in load_inputs(args.inputs)? {
        println!("{}", find_line(&store, &input, args.json)?);
    }
    Ok(())
}

/// Output line for `input`: `start..end<TAB>text`, `-`, or a JSON object.
pub fn find_line(store: &PatternStore, input: &str, json: bool) -> Result<String, CliError> {
    let span = store.locate(input)?;
    if json {
        let record = FindRecord::new(input, span);
        return Ok(serde_json::to_string(&record).expect("record serializes"));
    }
    Ok(match span {
        Some(span) => format!("{}..{}\t{}", span.start, span.end, &input[span.range()]),
        None => "-".to_string(),
    })
}
