//! Analysis configuration loaded from TOML
//!
//! # Example colortally.toml
//!
//! ```toml
//! [test]
//! significance_level = 0.01
//!
//! [view]
//! tail = 10
//! whole_data = false
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use crate::hypothesis::TestConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which rows the "your data" table and chart show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Number of most recent rows to show (None = every row)
    pub tail: Option<i64>,

    /// Chart the whole dataset with the uniform reference line instead of the tail
    pub whole_data: bool,
}

/// Root configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub test: TestConfig,
    pub view: ViewConfig,
}

impl AppConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.test.validate().map_err(|e| anyhow::anyhow!(e))?;
        if let Some(tail) = self.view.tail {
            if tail < 1 {
                anyhow::bail!("view.tail must be >= 1, got {}", tail);
            }
        }
        Ok(())
    }
}
