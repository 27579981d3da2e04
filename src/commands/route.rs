//! Implementation of the `personal-agent route` command.

use crate::cli::RouteArgs;
use crate::config::SystemConfig;
use crate::dispatch::{DispatchResolver, StrategyId};
use crate::error::{AppError, Result};
use std::io::Write;

/// Execute the `personal-agent route` command.
pub fn cmd_route(args: RouteArgs) -> Result<()> {
    let stdout = std::io::stdout();
    route_to(&args, &mut stdout.lock()).map(|_| ())
}

/// Resolve the request text and print the strategy id.
pub fn route_to<W: Write>(args: &RouteArgs, out: &mut W) -> Result<StrategyId> {
    let resolver = match &args.config {
        Some(path) => DispatchResolver::from_config(&SystemConfig::load(path)?),
        None => DispatchResolver::builtin(),
    };

    let text = args.text.join(" ");
    let strategy = resolver.resolve(&text);
    tracing::debug!(strategy = %strategy, "request routed");

    writeln!(out, "{}", strategy)
        .map_err(|e| AppError::UserError(format!("failed to write output: {}", e)))?;
    Ok(strategy)
}
