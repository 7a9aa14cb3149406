//! rulekit CLI.

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command};
use crate::commands::{print_outcome, run_check, run_rules};
use crate::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(LogConfig::from_flags(cli.verbose, cli.quiet)) {
        eprintln!("error: {error}");
        std::process::exit(2);
    }

    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args) {
            Ok(outcome) => {
                print_outcome(&outcome);
                outcome.exit_code()
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                2
            }
        },
        Command::Rules => {
            run_rules();
            0
        }
    };
    std::process::exit(exit_code);
}
