//! Validation module for the agent orchestrator.
//!
//! This module provides the deterministic cross-section checks run on a
//! structurally valid configuration:
//! - Duplicate detection: keys that collide ignoring case
//! - Reference checks: agent -> LLM profile, task -> agent, team -> agents
//!
//! Every violation is collected before returning, so callers get the full
//! diagnostic list in one pass.

mod validator;
mod violation;


pub use validator::{ConfigValidator, validate_config};
pub use violation::{ConfigError, ConfigViolation, ViolationKind};
