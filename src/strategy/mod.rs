//! Execution strategies.
//!
//! A strategy turns a [`UserRequest`] into an [`AgentResponse`]. Three
//! built-in strategies ship with the crate:
//!
//! - **basic**: direct processing of the request
//! - **research**: requests that need an investigation step
//! - **archivist**: archiving or recalling information
//!
//! Callers can register their own implementations of [`ExecutionStrategy`]
//! with a [`crate::dispatch::StrategyRegistry`].

mod builtin;

pub use builtin::{ArchivistStrategy, BasicStrategy, BuiltinStrategy, ResearchStrategy};

use serde::{Deserialize, Serialize};

/// A request from the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub text: String,
}

impl UserRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// The response produced by a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub text: String,
}

impl AgentResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Contract for request handlers.
///
/// Errors are the handler's own; the dispatcher passes them back to the
/// caller unchanged.
pub trait ExecutionStrategy: Send + Sync {
    /// Name used in logs to identify the handler.
    fn name(&self) -> &str;

    fn execute(&self, request: &UserRequest) -> anyhow::Result<AgentResponse>;
}
