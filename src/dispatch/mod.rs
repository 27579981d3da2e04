//! Request dispatch.
//!
//! This module maps free-text requests to strategy handlers:
//!
//! - **Keywords**: ordered table of strategy id -> trigger substrings
//! - **Resolver**: picks the first strategy whose keyword appears in the text
//! - **Registry**: maps strategy ids to handlers, falling back to `basic`
//!
//! Matching is plain substring containment on lowercased text. There is no
//! tokenisation or stemming.

mod error;
mod keywords;
mod registry;
mod resolver;


// Re-export public API
pub use error::DispatchError;
pub use keywords::{DEFAULT_KEYWORDS, KeywordTable, StrategyId};
pub use registry::{StrategyRegistry, StrategySelection};
pub use resolver::DispatchResolver;
