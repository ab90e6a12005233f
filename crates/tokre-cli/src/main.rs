mod cli;
mod commands;

use cli::{CompileParams, DumpParams, FindParams, ReplaceParams, build_cli};

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into());
        }
        Some(("find", m)) => {
            let params = FindParams::from_matches(m);
            commands::find::run(params.into());
        }
        Some(("replace", m)) => {
            let params = ReplaceParams::from_matches(m);
            commands::replace::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("tag", _)) => commands::tag::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
