//! Error types for rule evaluation.

use std::path::PathBuf;

use thiserror::Error;
use wdpa_model::ModelError;

/// Failure of a single check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The rule itself is malformed. Aborts the run.
    #[error("misconfigured rule: {0}")]
    Configuration(String),

    /// The record set lacks a column or holds an unreadable value.
    #[error(transparent)]
    DataShape(#[from] ModelError),

    /// A reference list the rule depends on was not supplied.
    #[error("reference data not supplied: {0}")]
    MissingReference(&'static str),
}

impl CheckError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, CheckError::Configuration(_))
    }
}

/// Failure of a whole validation run.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("rule '{rule}' is misconfigured: {message}")]
    Configuration { rule: String, message: String },

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading or validating a threshold configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid threshold {name}: {message}")]
    InvalidThreshold { name: &'static str, message: String },
}
