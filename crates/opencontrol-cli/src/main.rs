//! OpenControl standards CLI.

use clap::Parser;
use opencontrol_cli::cli::{Cli, Command};
use opencontrol_cli::logging::init_logging;

mod commands;

use crate::commands::{run_check, run_show};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Show(args) => match run_show(args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Check(args) => run_check(args),
    };
    std::process::exit(exit_code);
}
