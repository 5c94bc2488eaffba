use std::io::{self, Write};

use anyhow::Result;
use clap::{CommandFactory, Parser};

use q2_server_resolver::config::{normalize_args, Args, Config};
use q2_server_resolver::run;

fn main() -> Result<()> {
    let argv: Vec<_> = std::env::args_os().collect();

    // No arguments at all: show usage instead of dumping nothing
    if argv.len() < 2 {
        Args::command().print_help()?;
        return Ok(());
    }

    let config = Config::from_args(Args::parse_from(normalize_args(argv)));

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let resolution = run(&config)?;

    for warning in &resolution.warnings {
        eprintln!("{}", warning);
    }

    let mut stdout = io::stdout().lock();
    for line in &resolution.lines {
        writeln!(stdout, "{}", line)?;
    }

    Ok(())
}
