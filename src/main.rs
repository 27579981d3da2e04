//! personal-agent: validate agent configurations and dispatch requests.
//!
//! This is the main entry point for the `personal-agent` CLI. It parses
//! arguments, installs logging, dispatches to the command handler, and maps
//! errors to exit codes.

use personal_agent::cli::Cli;
use personal_agent::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
