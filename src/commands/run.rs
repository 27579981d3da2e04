//! Implementation of the `personal-agent run` command.
//!
//! # Steps
//!
//! 1. Load and validate the configuration
//! 2. Build a resolver from the defaults plus the config's `routing`
//! 3. Take the request from the arguments or one line of stdin
//! 4. Dispatch and print the response text

use crate::cli::RunArgs;
use crate::config::SystemConfig;
use crate::dispatch::DispatchResolver;
use crate::error::{AppError, Result};
use crate::strategy::{AgentResponse, UserRequest};
use crate::validate::validate_config;
use std::io::{BufRead, Write};

/// Execute the `personal-agent run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(&args, &mut stdin.lock(), &mut stdout.lock()).map(|_| ())
}

/// Run one request, reading from `input` when no text was given.
pub fn run_with<R: BufRead, W: Write>(
    args: &RunArgs,
    input: &mut R,
    out: &mut W,
) -> Result<AgentResponse> {
    let config = SystemConfig::load(&args.config)?;
    validate_config(&config)?;
    tracing::info!(
        version = config.version.as_deref().unwrap_or("unversioned"),
        "configuration loaded"
    );

    let resolver = DispatchResolver::from_config(&config);

    let text = if args.text.is_empty() {
        write!(out, "Enter your request: ")
            .and_then(|_| out.flush())
            .map_err(output_failed)?;
        read_request(input)?
    } else {
        args.text.join(" ")
    };

    let response = resolver.execute(&UserRequest::new(text))?;
    writeln!(out, "{}", response.text).map_err(output_failed)?;
    Ok(response)
}

fn read_request<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| AppError::UserError(format!("failed to read request: {}", e)))?;

    let text = line.trim_end_matches(['\r', '\n']).to_string();
    if text.trim().is_empty() {
        return Err(AppError::UserError("no request text given".to_string()));
    }
    Ok(text)
}

fn output_failed(err: std::io::Error) -> AppError {
    AppError::UserError(format!("failed to write output: {}", err))
}
