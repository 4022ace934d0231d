//! Runtime configuration: board size, cell size, pacing and seeding.
//!
//! Values come from an optional TOML file; every key is optional and falls
//! back to the defaults below. Command line flags are merged on top by
//! [`Config::with_overrides`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Board and pacing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Edge length of one cell in pixels
    pub cell_size: f32,
    /// Delay between generations in milliseconds
    pub step_delay_ms: u64,
    /// Step on the rayon pool instead of the current thread
    pub parallel: bool,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        // 1400×800 canvas of 20px cells
        Self {
            rows: 40,
            columns: 70,
            cell_size: 20.0,
            step_delay_ms: 150,
            parallel: false,
            seed: None,
        }
    }
}

/// Values that replace file settings when present.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub cell_size: Option<f32>,
    pub step_delay_ms: Option<u64>,
    pub parallel: bool,
    pub seed: Option<u64>,
}

impl Config {
    /// Parse a TOML document and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply command line overrides and validate the result
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self> {
        if let Some(rows) = overrides.rows {
            self.rows = rows;
        }
        if let Some(columns) = overrides.columns {
            self.columns = columns;
        }
        if let Some(cell_size) = overrides.cell_size {
            self.cell_size = cell_size;
        }
        if let Some(delay) = overrides.step_delay_ms {
            self.step_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.parallel |= overrides.parallel;

        self.validate()?;
        Ok(self)
    }

    /// Reject settings the window cannot display
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "cell_size must be a positive number, got {}",
                self.cell_size
            )));
        }
        if self.step_delay_ms == 0 {
            return Err(ConfigError::invalid("step_delay_ms must be at least 1"));
        }
        Ok(())
    }

    /// Step delay in seconds, as compared against frame times
    pub fn step_interval(&self) -> f32 {
        self.step_delay_ms as f32 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.rows, config.columns), (40, 70));
        assert!((config.step_interval() - 0.15).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("rows = 10\nseed = 5\n").unwrap();
        assert_eq!(config.rows, 10);
        assert_eq!(config.columns, 70);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Config::from_toml_str("speed = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let err = Config::from_toml_str("rows = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_cell_size_rejected() {
        let config = Config { cell_size: 0.0, ..Config::default() };
        assert!(config.validate().is_err());
        let config = Config { cell_size: f32::NAN, ..Config::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_delay_rejected() {
        let config = Config { step_delay_ms: 0, ..Config::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_overrides_win() {
        let overrides = Overrides {
            rows: Some(12),
            step_delay_ms: Some(50),
            parallel: true,
            seed: Some(1),
            ..Overrides::default()
        };
        let config = Config::default().with_overrides(&overrides).unwrap();
        assert_eq!(config.rows, 12);
        assert_eq!(config.columns, 70);
        assert_eq!(config.step_delay_ms, 50);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn test_overrides_are_validated() {
        let overrides = Overrides { columns: Some(0), ..Overrides::default() };
        assert!(Config::default().with_overrides(&overrides).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load("/nonexistent/toroidal_life.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
