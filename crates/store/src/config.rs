//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPCART_DATA_DIR` - Directory for persisted session records
//!   (default: `.shopcart`)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".shopcart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Session store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory the file backend keeps its records under.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `SHOPCART_DATA_DIR` is set but empty
    /// or not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("SHOPCART_DATA_DIR") {
            Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
                "SHOPCART_DATA_DIR".to_owned(),
                "must not be empty".to_owned(),
            )),
            Ok(value) => Ok(Self {
                data_dir: PathBuf::from(value),
            }),
            Err(std::env::VarError::NotPresent) => Ok(Self::default()),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar(
                "SHOPCART_DATA_DIR".to_owned(),
                "must be valid Unicode".to_owned(),
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_dir() {
        let config = StoreConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".shopcart"));
    }
}
