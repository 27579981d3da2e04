//! Config loading and serialization.

use super::model::SystemConfig;
use super::schema::SchemaError;
use serde::de::IgnoredAny;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to turn a file or string into a [`SystemConfig`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The text is not well-formed YAML.
    #[error("failed to parse config YAML: {0}")]
    Parse(#[source] serde_yaml::Error),

    /// The YAML does not have the shape of a configuration.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl SystemConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(SystemConfig)` - Structurally valid config (references unchecked)
    /// * `Err(LoadError)` - Unreadable file, malformed YAML, or schema problems
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// Text that is not well-formed YAML is a [`LoadError::Parse`]; YAML of
    /// the wrong shape is a [`LoadError::Schema`].
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(yaml).map_err(|err| {
            match serde_yaml::from_str::<IgnoredAny>(yaml) {
                Err(syntax) => LoadError::Parse(syntax),
                Ok(_) => LoadError::Schema(SchemaError::from(err)),
            }
        })
    }

    /// Serialize config to a YAML string, keeping section order.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
