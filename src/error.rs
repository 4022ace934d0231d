//! Error types for loading and validating configuration.
//!
//! The automaton itself cannot fail; everything here is about getting a
//! usable [`Config`](crate::Config) together before the window opens.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::Config)
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates a new validation error.
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::invalid("rows must be positive");
        assert_eq!(err.to_string(), "invalid config: rows must be positive");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("life.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("life.toml"));
    }
}
