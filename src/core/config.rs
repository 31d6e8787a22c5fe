//! TOML configuration for the CLI front end.
//!
//! The engine needs no configuration; this file only shapes how the CLI
//! locates data and renders output. Absent file means defaults; an
//! explicitly requested file that does not exist is an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{BiqError, Result};

/// Resolved application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default plans file used when `--plans` is not given.
    pub plans_path: Option<PathBuf>,
    /// Default organization filter applied to loaded plans.
    pub organization: Option<String>,
    /// Append-only JSONL run log; logging is disabled when unset.
    pub log_path: Option<PathBuf>,
    /// Narrative (insight) settings.
    pub narrative: NarrativeConfig,
}

/// Narrative (insight) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarrativeConfig {
    /// Whether `project` may emit an insight paragraph at all.
    pub enabled: bool,
    /// Scenario name used when the caller does not provide one.
    pub default_scenario_name: String,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_scenario_name: "Unnamed scenario".to_string(),
        }
    }
}

impl Config {
    /// Parse a config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(BiqError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let raw = std::fs::read_to_string(path).map_err(|source| BiqError::io(path, source))?;
        let config: Self = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Resolve configuration: an explicit path must parse; otherwise the
    /// default location is used if present, and defaults apply if not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Default config location: `$XDG_CONFIG_HOME/biq/config.toml`, falling
    /// back to `~/.config/biq/config.toml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        if let Some(base) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(base).join("biq").join("config.toml"));
        }
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config").join("biq").join("config.toml"))
    }
}
