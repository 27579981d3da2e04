//! Configuration model for the agent orchestrator.
//!
//! This module defines `SystemConfig`, the typed form of the configuration
//! document: LLM profiles, agents, tasks, teams, an optional version and an
//! optional keyword routing table. Parsing fails closed: unknown fields,
//! wrong types and out-of-bounds values are rejected with a `SchemaError`
//! naming the dotted path of the first problem.
//!
//! References between sections are checked separately by
//! [`crate::validate::ConfigValidator`].

mod model;
mod operations;
mod schema;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{Agent, LlmProfile, SystemConfig, Task, Team};
pub use operations::LoadError;
pub use schema::{SchemaError, SchemaIssue};
pub use types::{Section, SectionName};
