//! Built-in strategy handlers.

use super::{AgentResponse, ExecutionStrategy, UserRequest};

/// Identifiers of the strategies that ship with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStrategy {
    Basic,
    Research,
    Archivist,
}

impl BuiltinStrategy {
    pub const ALL: [BuiltinStrategy; 3] = [
        BuiltinStrategy::Basic,
        BuiltinStrategy::Research,
        BuiltinStrategy::Archivist,
    ];

    /// The strategy id used in keyword tables and the registry.
    pub fn id(self) -> &'static str {
        match self {
            BuiltinStrategy::Basic => "basic",
            BuiltinStrategy::Research => "research",
            BuiltinStrategy::Archivist => "archivist",
        }
    }

    /// A fresh handler for this strategy.
    pub fn handler(self) -> Box<dyn ExecutionStrategy> {
        match self {
            BuiltinStrategy::Basic => Box::new(BasicStrategy),
            BuiltinStrategy::Research => Box::new(ResearchStrategy),
            BuiltinStrategy::Archivist => Box::new(ArchivistStrategy),
        }
    }
}

/// Minimal strategy: echoes the request as processed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl ExecutionStrategy for BasicStrategy {
    fn name(&self) -> &str {
        "BasicStrategy"
    }

    fn execute(&self, request: &UserRequest) -> anyhow::Result<AgentResponse> {
        tracing::info!("executing BasicStrategy");
        Ok(AgentResponse::new(format!("Processed: {}", request.text)))
    }
}

/// Simulates researching the request's topic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResearchStrategy;

impl ExecutionStrategy for ResearchStrategy {
    fn name(&self) -> &str {
        "ResearchStrategy"
    }

    fn execute(&self, request: &UserRequest) -> anyhow::Result<AgentResponse> {
        tracing::info!("executing ResearchStrategy");
        Ok(AgentResponse::new(format!("Researching: {}", request.text)))
    }
}

/// Simulates archiving the request text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchivistStrategy;

impl ExecutionStrategy for ArchivistStrategy {
    fn name(&self) -> &str {
        "ArchivistStrategy"
    }

    fn execute(&self, request: &UserRequest) -> anyhow::Result<AgentResponse> {
        tracing::info!("executing ArchivistStrategy");
        Ok(AgentResponse::new(format!("Archived: {}", request.text)))
    }
}
