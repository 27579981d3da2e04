//! Error types for the personal-agent CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::config::LoadError;
use crate::dispatch::DispatchError;
use crate::exit_codes;
use crate::validate::ConfigError;
use thiserror::Error;

/// Main error type for CLI operations.
///
/// Each variant maps to a process exit code.
#[derive(Error, Debug)]
pub enum AppError {
    /// User provided invalid input or the environment is unusable.
    #[error("{0}")]
    UserError(String),

    /// The config file could not be read or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration violates cross-section rules.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Routing or strategy execution failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl AppError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::UserError(_) => exit_codes::FAILURE,
            AppError::Load(_) => exit_codes::FAILURE,
            AppError::Config(_) => exit_codes::FAILURE,
            AppError::Dispatch(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SectionName;
    use crate::dispatch::StrategyId;
    use crate::validate::ConfigViolation;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = AppError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert_eq!(err.to_string(), "bad argument");
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err: AppError = ConfigError {
            violations: vec![ConfigViolation::duplicate(SectionName::Agents, "Writer")],
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(err.to_string().contains("Duplicate agent entry 'Writer'"));
    }

    #[test]
    fn dispatch_error_has_correct_exit_code() {
        let err: AppError = DispatchError::UnknownStrategy {
            requested: StrategyId::from("poetry"),
        }
        .into();
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn load_error_message_is_passed_through() {
        let err: AppError = crate::config::SystemConfig::from_yaml("foo: [bar")
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
        assert!(err.to_string().starts_with("failed to parse config YAML"));
    }
}
