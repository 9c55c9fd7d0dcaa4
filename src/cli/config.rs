//! Configuration file
//!
//! Optional JSON file; every field has a default and command-line flags
//! override the dataset paths.
//!
//! ```json
//! {
//!   "neo_path": "data/neos.csv",
//!   "cad_path": "data/cad.json",
//!   "default_limit": 10,
//!   "log_level": "warn"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// NEO dataset (CSV)
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,

    /// Close approach dataset (JSON)
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,

    /// Results printed by `query` when no limit is given (must be > 0)
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Lowest log severity emitted: trace, info, warn, error or fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_limit() -> usize {
    10
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            default_limit: default_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse configuration from JSON text
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.default_limit == 0 {
            return Err(CliError::config_error("default_limit must be > 0"));
        }

        self.log_severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }
}
