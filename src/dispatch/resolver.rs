//! Keyword-based request routing.

use super::error::DispatchError;
use super::keywords::{KeywordTable, StrategyId};
use super::registry::{StrategyRegistry, StrategySelection};
use crate::config::SystemConfig;
use crate::strategy::{AgentResponse, UserRequest};

/// Routes requests to strategy handlers by keyword.
///
/// Both the keyword table and the registry are fixed at construction, so a
/// resolver can be shared across threads without locking. To change routing
/// at runtime, build a new resolver and swap it in.
#[derive(Debug)]
pub struct DispatchResolver {
    keywords: KeywordTable,
    registry: StrategyRegistry,
}

impl Default for DispatchResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DispatchResolver {
    pub fn new(keywords: KeywordTable, registry: StrategyRegistry) -> Self {
        Self { keywords, registry }
    }

    /// Default keywords with the built-in handlers.
    pub fn builtin() -> Self {
        Self::new(KeywordTable::defaults(), StrategyRegistry::builtin())
    }

    /// Default keywords merged with the config's `routing` table, with the
    /// built-in handlers.
    pub fn from_config(config: &SystemConfig) -> Self {
        let keywords = match &config.routing {
            Some(routing) => KeywordTable::with_overrides(routing),
            None => KeywordTable::defaults(),
        };
        Self::new(keywords, StrategyRegistry::builtin())
    }

    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }

    /// Pick a strategy id for `text`.
    ///
    /// Returns the first strategy, in table order, with a keyword that is a
    /// substring of the lowercased text; `basic` when nothing matches.
    pub fn resolve(&self, text: &str) -> StrategyId {
        self.keywords
            .matching(text)
            .cloned()
            .unwrap_or_else(StrategyId::basic)
    }

    /// Look up the handler for `id`. See [`StrategyRegistry::select`].
    pub fn select(&self, id: &StrategyId) -> Result<StrategySelection<'_>, DispatchError> {
        self.registry.select(id)
    }

    /// Resolve, select and run the handler for `request`.
    ///
    /// A handler failure is logged and returned unchanged as
    /// [`DispatchError::Handler`].
    pub fn execute(&self, request: &UserRequest) -> Result<AgentResponse, DispatchError> {
        tracing::info!("processing user request");

        let analysis = self.resolve(&request.text);
        tracing::debug!(strategy = %analysis, "analysis complete");

        let selection = self.select(&analysis)?;
        let handler = selection.handler.name();
        tracing::debug!(strategy = %selection.resolved, handler, "strategy selected");

        let response = selection.handler.execute(request).map_err(|err| {
            tracing::error!(handler, error = %err, "strategy execution failed");
            DispatchError::Handler(err)
        })?;
        tracing::debug!(response = %response.text, "execution complete");

        tracing::info!("user request processed");
        Ok(response)
    }
}
