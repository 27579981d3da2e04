//! CLI argument parsing for personal-agent.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_PATH: &str = "system_config.yaml";

/// Personal agent: validates an agent configuration and routes requests to
/// strategies by keyword.
#[derive(Parser, Debug)]
#[command(name = "personal-agent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for personal-agent.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration file.
    ///
    /// Checks the document's structure, then references between LLM
    /// profiles, agents, tasks and teams. Every problem is reported;
    /// exits 1 if there are any.
    Validate(ValidateArgs),

    /// Show which strategy a request would be routed to.
    Route(RouteArgs),

    /// Load the configuration and process one request.
    ///
    /// The request is taken from the arguments, or read from stdin when
    /// none are given.
    Run(RunArgs),
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the configuration file.
    pub path: PathBuf,

    /// Print one JSON object per problem instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `route` command.
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Request text.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Configuration whose `routing` table extends the defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Request text (read from stdin if omitted).
    pub text: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
