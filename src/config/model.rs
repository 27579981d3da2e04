//! SystemConfig and entity definitions.

use super::schema::{non_empty, temperature, version};
use super::types::{Section, default_temperature};
use serde::{Deserialize, Serialize};

/// Connection settings for one language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmProfile {
    /// LLM service provider identifier (e.g. "openai").
    #[serde(deserialize_with = "non_empty")]
    pub provider: String,
    /// Model name or identifier.
    #[serde(deserialize_with = "non_empty")]
    pub model: String,
    /// Sampling temperature, in `(0.0, 1.0]`.
    #[serde(
        default = "default_temperature",
        deserialize_with = "temperature"
    )]
    pub temperature: f64,
}

/// An agent bound to an LLM profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Agent {
    /// Short description of the agent's purpose.
    pub description: String,
    /// Key into `llm_profiles`.
    pub llm: String,
}

/// A task assigned to one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub description: String,
    /// Key into `agents`.
    pub agent: String,
}

/// An ordered group of agents. Repeated members are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub agents: Vec<String>,
}

/// The full configuration document.
///
/// Built once when loaded and read-only afterwards. Cross-section
/// references are checked by [`crate::validate::ConfigValidator`], not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Configuration schema version (`<major>.<minor>`).
    #[serde(
        default,
        deserialize_with = "version",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,

    pub llm_profiles: Section<LlmProfile>,

    pub agents: Section<Agent>,

    pub tasks: Section<Task>,

    pub teams: Section<Team>,

    /// Keyword routing table: strategy id -> keywords, in priority order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<Section<Vec<String>>>,
}
