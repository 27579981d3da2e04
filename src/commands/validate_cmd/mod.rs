//! Implementation of the `personal-agent validate` command.
//!
//! # Steps
//!
//! 1. Read and parse the YAML file
//! 2. Check the document's structure (schema)
//! 3. Check references and duplicate keys
//! 4. Print one line per problem, or a summary on success

mod report;


use crate::cli::ValidateArgs;
use crate::config::{LoadError, SystemConfig};
use crate::error::{AppError, Result};
use crate::validate::ConfigValidator;
use std::io::Write;

pub use report::{Problem, write_problems};

/// Execute the `personal-agent validate` command.
///
/// # Exit Codes
///
/// - 0: Configuration is valid
/// - 1: File unreadable, malformed YAML, a schema problem or violations
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let stdout = std::io::stdout();
    validate_to(&args, &mut stdout.lock())
}

/// Run validation, writing the report to `out`.
pub fn validate_to<W: Write>(args: &ValidateArgs, out: &mut W) -> Result<()> {
    tracing::info!(path = %args.path.display(), "validating configuration file");

    let config = match SystemConfig::load(&args.path) {
        Ok(config) => config,
        Err(LoadError::Schema(err)) => {
            write_report(out, &[Problem::Schema(&err.issue)], args.json)?;
            return Err(AppError::UserError(format!(
                "configuration '{}' does not match the schema",
                args.path.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };

    let violations = ConfigValidator::new(&config).violations();
    if !violations.is_empty() {
        let problems: Vec<Problem<'_>> = violations.iter().map(Problem::Violation).collect();
        write_report(out, &problems, args.json)?;
        return Err(AppError::UserError(format!(
            "configuration '{}' is invalid: {} violation(s)",
            args.path.display(),
            problems.len()
        )));
    }

    tracing::info!("configuration is valid");
    if !args.json {
        writeln!(
            out,
            "Configuration valid: {} llm profile(s), {} agent(s), {} task(s), {} team(s)",
            config.llm_profiles.len(),
            config.agents.len(),
            config.tasks.len(),
            config.teams.len()
        )
        .map_err(write_failed)?;
    }
    Ok(())
}

fn write_report<W: Write>(out: &mut W, problems: &[Problem<'_>], as_json: bool) -> Result<()> {
    write_problems(out, problems, as_json).map_err(write_failed)
}

fn write_failed(err: std::io::Error) -> AppError {
    AppError::UserError(format!("failed to write validation report: {}", err))
}
