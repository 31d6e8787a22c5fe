//! BIQ-prefixed error types with structured error codes.
//!
//! The calculation engine itself is total and has no error path; everything
//! here covers the surrounding layers (config, store, narrative, CLI).

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, BiqError>;

/// Top-level error type for the Benefits IQ engine.
#[derive(Debug, Error)]
pub enum BiqError {
    #[error("[BIQ-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[BIQ-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[BIQ-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[BIQ-1101] invalid adjustment spec '{spec}': {details}")]
    AdjustmentSpec { spec: String, details: String },

    #[error("[BIQ-2001] plan data failure for {path}: {details}")]
    PlanData { path: PathBuf, details: String },

    #[error("[BIQ-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[BIQ-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[BIQ-4001] narrative generation failure: {details}")]
    Narrative { details: String },
}

impl BiqError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "BIQ-1001",
            Self::MissingConfig { .. } => "BIQ-1002",
            Self::ConfigParse { .. } => "BIQ-1003",
            Self::AdjustmentSpec { .. } => "BIQ-1101",
            Self::PlanData { .. } => "BIQ-2001",
            Self::Serialization { .. } => "BIQ-2101",
            Self::Io { .. } => "BIQ-3002",
            Self::Narrative { .. } => "BIQ-4001",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for BiqError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for BiqError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BiqError;
    use std::path::PathBuf;

    #[test]
    fn display_carries_the_stable_code() {
        let error = BiqError::PlanData {
            path: PathBuf::from("/data/plans.json"),
            details: "expected an array".to_string(),
        };
        assert!(error.to_string().starts_with("[BIQ-2001]"));
        assert_eq!(error.code(), "BIQ-2001");
    }
}
