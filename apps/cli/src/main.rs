//! `intake` command-line entry point.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::commands::Outcome;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = intake_log::Config::from_env().with_service("intake");
    if let Some(level) = cli.log_level() {
        log_config = log_config.with_level(level);
    }
    let _guard = match intake_log::init_with(log_config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();

    match cli.command {
        Command::Submit(args) => {
            let rules = config::load_rules(cli.config.as_deref())?;
            commands::submit(rules, args, &mut out, &mut stderr.lock())
        }
        Command::Check(args) => commands::check_value(args, &mut out),
        Command::Rules => {
            let rules = config::load_rules(cli.config.as_deref())?;
            commands::print_rules(&rules, &mut out)
        }
    }
}
