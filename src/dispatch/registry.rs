//! Strategy handler registry and selection.
//!
//! # Selection Order
//!
//! 1. Handler registered under the requested id
//! 2. The `basic` handler, with a warning
//! 3. `DispatchError::UnknownStrategy` if `basic` is not registered either

use super::error::DispatchError;
use super::keywords::StrategyId;
use crate::strategy::{BuiltinStrategy, ExecutionStrategy};

/// Handlers keyed by strategy id, in registration order.
#[derive(Default)]
pub struct StrategyRegistry {
    handlers: Vec<(StrategyId, Box<dyn ExecutionStrategy>)>,
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("handlers", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}

/// A handler chosen for a strategy id.
pub struct StrategySelection<'a> {
    /// The id that was asked for.
    pub requested: StrategyId,
    /// The id whose handler was returned.
    pub resolved: StrategyId,
    pub handler: &'a dyn ExecutionStrategy,
    /// Whether `requested` was missing and `basic` was used instead.
    pub fell_back: bool,
}

impl std::fmt::Debug for StrategySelection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategySelection")
            .field("requested", &self.requested)
            .field("resolved", &self.resolved)
            .field("handler", &self.handler.name())
            .field("fell_back", &self.fell_back)
            .finish()
    }
}

impl StrategyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in strategies.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for strategy in BuiltinStrategy::ALL {
            registry.register_boxed(strategy, strategy.handler());
        }
        registry
    }

    /// Register `handler` under `id`, replacing any previous handler.
    pub fn register(
        &mut self,
        id: impl Into<StrategyId>,
        handler: impl ExecutionStrategy + 'static,
    ) {
        self.register_boxed(id, Box::new(handler));
    }

    pub fn register_boxed(
        &mut self,
        id: impl Into<StrategyId>,
        handler: Box<dyn ExecutionStrategy>,
    ) {
        let id = id.into();
        match self.handlers.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = handler,
            None => self.handlers.push((id, handler)),
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn ExecutionStrategy> {
        self.handlers
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, handler)| handler.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &StrategyId> {
        self.handlers.iter().map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Select the handler for `id`, falling back to `basic`.
    ///
    /// # Errors
    ///
    /// - `id` is not registered and neither is `basic`
    pub fn select(&self, id: &StrategyId) -> Result<StrategySelection<'_>, DispatchError> {
        if let Some(handler) = self.get(id.as_str()) {
            return Ok(StrategySelection {
                requested: id.clone(),
                resolved: id.clone(),
                handler,
                fell_back: false,
            });
        }

        let basic = StrategyId::basic();
        match self.get(basic.as_str()) {
            Some(handler) => {
                tracing::warn!(strategy = %id, "unknown strategy, using '{}'", basic);
                Ok(StrategySelection {
                    requested: id.clone(),
                    resolved: basic,
                    handler,
                    fell_back: true,
                })
            }
            None => Err(DispatchError::UnknownStrategy {
                requested: id.clone(),
            }),
        }
    }
}
