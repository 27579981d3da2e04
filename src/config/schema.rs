//! Structural rules for the configuration document.
//!
//! The model derives `Deserialize` with unknown fields denied. Field values
//! with bounds or formats are checked by the `deserialize_with` helpers
//! below, inside the field's own deserializer call, so a failure carries the
//! dotted path of that field. Only the first problem is reported.
//!
//! Cross-section references are not checked here.

use super::types::{TEMPERATURE_MAX_INCLUSIVE, TEMPERATURE_MIN_EXCLUSIVE, VERSION_PATTERN};
use regex::Regex;
use serde::Serialize;
use serde::de::{self, Deserializer, Visitor};
use std::sync::LazyLock;
use thiserror::Error;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("Invalid version regex"));

/// A structural problem in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaIssue {
    /// Dotted path to the offending value (`agents.writer`,
    /// `teams.core.agents[1]`). Empty for the document root.
    pub path: String,
    /// What was expected and what was found.
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl SchemaIssue {
    /// Whether the problem is a malformed `version`.
    pub fn is_version(&self) -> bool {
        self.path == "version"
    }
}

impl From<&serde_yaml::Error> for SchemaIssue {
    fn from(err: &serde_yaml::Error) -> Self {
        let mut text = err.to_string();
        let (line, column) = match err.location() {
            Some(loc) => {
                let suffix = format!(" at line {} column {}", loc.line(), loc.column());
                if text.ends_with(&suffix) {
                    text.truncate(text.len() - suffix.len());
                }
                (Some(loc.line()), Some(loc.column()))
            }
            None => (None, None),
        };

        // serde_yaml prefixes the path unless the error is at the root.
        // Paths never contain whitespace; message heads always do.
        let (path, message) = match text.split_once(": ") {
            Some((head, rest)) if !head.is_empty() && !head.contains(char::is_whitespace) => {
                (head.to_string(), rest.to_string())
            }
            _ => (String::new(), text),
        };

        Self {
            path,
            message,
            line,
            column,
        }
    }
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = if self.path.is_empty() {
            "<root>"
        } else {
            &self.path
        };
        write!(f, "{}: {}", path, self.message)?;
        if let (Some(line), Some(column)) = (self.line, self.column) {
            write!(f, " (line {}, column {})", line, column)?;
        }
        Ok(())
    }
}

/// The document does not have the shape of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid configuration document: {issue}")]
pub struct SchemaError {
    pub issue: SchemaIssue,
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(err: serde_yaml::Error) -> Self {
        Self {
            issue: SchemaIssue::from(&err),
        }
    }
}

/// Reject blank strings.
pub(crate) fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    struct NonEmpty;

    impl Visitor<'_> for NonEmpty {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a non-empty string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            if value.trim().is_empty() {
                return Err(E::custom(format!(
                    "expected a non-empty string, got '{}'",
                    value
                )));
            }
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_string(NonEmpty)
}

/// Accept a number in `(0, 1]`.
pub(crate) fn temperature<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    struct Temperature;

    impl Visitor<'_> for Temperature {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a number in (0, 1]")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            if value > TEMPERATURE_MIN_EXCLUSIVE && value <= TEMPERATURE_MAX_INCLUSIVE {
                Ok(value)
            } else {
                Err(E::custom(format!(
                    "expected a number in (0, 1], got {}",
                    value
                )))
            }
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            self.visit_f64(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            self.visit_f64(value as f64)
        }
    }

    deserializer.deserialize_f64(Temperature)
}

/// Accept a `<major>.<minor>` version string.
pub(crate) fn version<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    struct Version;

    impl Visitor<'_> for Version {
        type Value = String;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a version string in the format 'X.Y'")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            if !VERSION_REGEX.is_match(value) {
                return Err(E::custom(format!(
                    "invalid version '{}': expected format 'X.Y'",
                    value
                )));
            }
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_str(Version).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display_with_location() {
        let issue = SchemaIssue {
            path: "agents.writer".to_string(),
            message: "missing field `llm`".to_string(),
            line: Some(4),
            column: Some(3),
        };
        assert_eq!(
            issue.to_string(),
            "agents.writer: missing field `llm` (line 4, column 3)"
        );
    }

    #[test]
    fn test_issue_display_at_root() {
        let issue = SchemaIssue {
            path: String::new(),
            message: "missing field `teams`".to_string(),
            line: None,
            column: None,
        };
        assert_eq!(issue.to_string(), "<root>: missing field `teams`");
    }

    #[test]
    fn test_version_regex() {
        assert!(VERSION_REGEX.is_match("1.0"));
        assert!(VERSION_REGEX.is_match("10.42"));
        assert!(!VERSION_REGEX.is_match("1"));
        assert!(!VERSION_REGEX.is_match("1.0.0"));
    }
}
