use std::io;
use std::process::ExitCode;

use clap::Parser;
use tincture_cli::logger::{self, LOG_ENV};
use tincture_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_level = std::env::var(LOG_ENV).ok();
    logger::init(logger::level_from_flags(
        cli.verbose,
        cli.quiet,
        env_level.as_deref(),
    ));

    let stdout_is_term = console::Term::stdout().is_term();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match tincture_cli::run(&cli, stdin.lock(), &mut stdout.lock(), stdout_is_term) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tincture: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
