//! Command implementations for personal-agent.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod route;
mod run;
mod validate_cmd;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Route(args) => route::cmd_route(args),
        Command::Run(args) => run::cmd_run(args),
    }
}
