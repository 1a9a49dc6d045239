//! `hornet` - read facts and rules from files, then answer queries
//!
//! Usage:
//!   hornet [--config engine.json] [--json] [--log filter] [file...]

use anyhow::Result;
use hornet_core::Environment;
use hornet_repl::{Options, Session, USAGE};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(options: &Options) -> Result<()> {
    let env = Environment::with_config(options.engine_config()?);
    let mut session = Session::new(env, options.output_format(), io::stdout().lock());

    for file in &options.files {
        session.load_file(file)?;
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    session.run(stdin.lock(), &mut io::stderr(), interactive)
}

fn main() -> ExitCode {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_logging(options.log.as_deref());

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
