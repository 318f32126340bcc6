//! Error types for the report pipeline.
//!
//! Malformed benchmark data never produces an error: short CSV rows are
//! skipped and unparseable result filenames are excluded from selection.
//! Errors are reserved for the things the operator must fix: unreadable
//! input, unwritable output, broken configuration files, and plot backend
//! failures.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that terminate a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading input or writing an artifact failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML configuration or registry file could not be parsed.
    #[error("toml parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// A configuration could not be serialized to TOML.
    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// A JSON configuration file could not be parsed or written.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The plot backend reported a drawing failure.
    #[error("plot rendering failed: {0}")]
    Plot(String),
}
