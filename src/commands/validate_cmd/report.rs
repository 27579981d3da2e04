//! Rendering of validation problems, one line each.

use crate::config::SchemaIssue;
use crate::validate::ConfigViolation;
use serde_json::json;
use std::io::Write;

/// One reportable problem from either validation stage.
#[derive(Debug, Clone, Copy)]
pub enum Problem<'a> {
    Schema(&'a SchemaIssue),
    Violation(&'a ConfigViolation),
}

impl Problem<'_> {
    /// Text line for the problem.
    ///
    /// A malformed `version` is printed as its bare message.
    pub fn to_line(&self) -> String {
        match self {
            Problem::Schema(issue) if issue.is_version() => issue.message.clone(),
            Problem::Schema(issue) => format!("schema: {}", issue),
            Problem::Violation(violation) => violation.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Problem::Schema(issue) => json!({
                "kind": "schema",
                "path": issue.path,
                "message": issue.message,
                "line": issue.line,
                "column": issue.column,
            }),
            Problem::Violation(violation) => json!({
                "kind": violation.kind,
                "section": violation.section,
                "entity_key": violation.entity_key,
                "field": violation.field,
                "offending_value": violation.offending_value,
                "message": violation.message,
            }),
        }
    }
}

/// Write every problem to `out`, as text lines or JSON lines.
pub fn write_problems<W: Write>(
    out: &mut W,
    problems: &[Problem<'_>],
    as_json: bool,
) -> std::io::Result<()> {
    for problem in problems {
        if as_json {
            writeln!(out, "{}", problem.to_json())?;
        } else {
            writeln!(out, "{}", problem.to_line())?;
        }
    }
    Ok(())
}
