pub mod compression_config;
pub mod defaults;
pub mod observability_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use compression_config::CompressionConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::{CoachResult, ConfigError};

/// Top-level configuration, loadable from TOML. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachConfig {
    pub compression: CompressionConfig,
    pub observability: ObservabilityConfig,
}

impl CoachConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> CoachResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CoachResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    pub fn validate(&self) -> CoachResult<()> {
        self.compression.validate()?;
        Ok(())
    }
}
