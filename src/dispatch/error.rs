//! Dispatch error type.

use super::keywords::StrategyId;
use thiserror::Error;

/// Failure while selecting or running a strategy.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The requested strategy is not registered and there is no `basic`
    /// handler to fall back to.
    #[error(
        "unknown strategy '{requested}': not registered and no 'basic' fallback is available"
    )]
    UnknownStrategy { requested: StrategyId },

    /// The selected handler failed. The handler's error is kept as-is.
    #[error(transparent)]
    Handler(anyhow::Error),
}
