//! Core types for configuration violations.

use crate::config::SectionName;
use serde::Serialize;
use thiserror::Error;

/// Type of configuration violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Key collides case-insensitively with an earlier key in the same section.
    Duplicate,
    /// A reference names an entry that does not exist.
    UnknownReference,
}

/// A single referential-integrity or duplicate-key violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigViolation {
    pub kind: ViolationKind,
    /// Section containing the offending entry.
    pub section: SectionName,
    /// Key of the offending entry, as written.
    pub entity_key: String,
    /// Field holding the bad reference (`None` for duplicates).
    pub field: Option<String>,
    /// The value that failed the check.
    pub offending_value: String,
    /// Human-readable description.
    pub message: String,
}

impl ConfigViolation {
    /// Create a duplicate-key violation.
    pub fn duplicate(section: SectionName, key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: ViolationKind::Duplicate,
            section,
            message: format!("Duplicate {} entry '{}'", section.singular(), key),
            offending_value: key.clone(),
            entity_key: key,
            field: None,
        }
    }

    /// Create an unknown-reference violation.
    pub fn unknown_reference(
        section: SectionName,
        entity_key: impl Into<String>,
        field: impl Into<String>,
        offending_value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: ViolationKind::UnknownReference,
            section,
            entity_key: entity_key.into(),
            field: Some(field.into()),
            offending_value: offending_value.into(),
            message: message.into(),
        }
    }

    /// Dotted location of the violation (e.g. `agents.writer.llm`).
    pub fn location(&self) -> String {
        match &self.field {
            Some(field) => format!("{}.{}.{}", self.section, self.entity_key, field),
            None => format!("{}.{}", self.section, self.entity_key),
        }
    }
}

impl std::fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Aggregate of every violation found in one validation pass.
///
/// Never empty; a clean config validates to `Ok(())`. Renders one
/// violation per line:
///
/// ```text
/// Configuration has 2 violation(s)
///
///   x agents.writer.llm: Unknown llm profile 'fast' for agent 'writer'
///   x tasks.draft.agent: Unknown agent 'editor' for task 'draft'
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", format_violations(.violations))]
pub struct ConfigError {
    pub violations: Vec<ConfigViolation>,
}

impl ConfigError {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    let mut msg = format!("Configuration has {} violation(s)\n", violations.len());

    for violation in violations {
        msg.push_str(&format!("\n  x {}", violation));
    }

    msg
}
