//! Personal agent orchestrator core.
//!
//! Two pieces live here:
//!
//! - [`config`] and [`validate`]: load the system configuration (LLM
//!   profiles, agents, tasks, teams) and check it for duplicate keys and
//!   dangling references, reporting every problem at once.
//! - [`dispatch`]: route a free-text request to an execution strategy by
//!   keyword, falling back to `basic` when a strategy is not registered.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod strategy;
pub mod validate;

#[cfg(test)]
mod test_support;
