//! Report configuration management.
//!
//! This module provides unified configuration for the report pipeline, with
//! serialization support so a configuration can be versioned alongside the
//! experiments it describes.
//!
//! The values collected here were ambient globals in earlier tooling (timeout
//! sentinel set, timeout substitute value, results-file timestamp format).
//! They are loaded once, validated, and passed immutably into the components
//! that need them.
//!
//! # Example
//!
//! ```ignore
//! use bench_report::config::ReportConfig;
//!
//! let config = ReportConfig::default();
//! config.save_toml("report_config.toml")?;
//!
//! let loaded = ReportConfig::load_toml("report_config.toml")?;
//! let driver = ReportDriver::new(loaded, DisplayRegistry::builtin());
//! ```

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Default experimental-setup description used in table captions until a
/// `SETUP:` directive in the input stream overrides it.
pub const DEFAULT_SETUP: &str =
    "a desktop with an Intel Core i7-8700 CPU @ 3.20GHz and 32GB of RAM";

/// Unified report configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReportConfig {
    /// Substitute value (in seconds) recorded for a timed-out run so that
    /// timeouts sort after every real measurement and remain log-plottable.
    pub timeout_value: f64,

    /// Sentinel strings the benchmark runner emits for a timed-out run.
    pub timeout_names: Vec<String>,

    /// `chrono` format string for the timestamp segment embedded in result
    /// file names.
    pub timestamp_format: String,

    /// Directory tree scanned for timestamped result CSV files.
    pub results_dir: PathBuf,

    /// Hardware/environment description shown in table captions.
    pub default_setup: String,

    /// Environment variable naming the directory artifacts are copied to
    /// when the copy step is requested.
    pub local_copy_env: String,

    /// Font size for plot axis labels and legends.
    pub plot_font_size: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            timeout_value: 600.0,
            timeout_names: vec!["timeout".to_string(), "TIMEOUT".to_string()],
            timestamp_format: "%Y%m%d-%H%M".to_string(),
            results_dir: PathBuf::from("benchmarks/data/exp"),
            default_setup: DEFAULT_SETUP.to_string(),
            local_copy_env: "SYND_LOCAL_COPY".to_string(),
            plot_font_size: 14,
        }
    }
}

impl ReportConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the results directory.
    pub fn with_results_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Set the default experimental-setup label.
    pub fn with_default_setup(mut self, setup: impl Into<String>) -> Self {
        self.default_setup = setup.into();
        self
    }

    /// True iff `time` is one of the configured timeout sentinels.
    pub fn is_timeout_name(&self, time: &str) -> bool {
        self.timeout_names.iter().any(|n| n == time)
    }

    /// Validate the configuration.
    ///
    /// Returns Ok(()) if valid, Err(msg) otherwise.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.timeout_value.is_finite() || self.timeout_value <= 0.0 {
            return Err("timeout_value must be a positive, finite number of seconds".to_string());
        }

        if self.timeout_names.is_empty() {
            return Err("timeout_names must name at least one sentinel".to_string());
        }

        if self.timeout_names.iter().any(|n| n.parse::<f64>().is_ok()) {
            return Err("timeout_names must not be parseable as numbers".to_string());
        }

        if self.timestamp_format.is_empty() {
            return Err("timestamp_format must not be empty".to_string());
        }

        if self.local_copy_env.is_empty() {
            return Err("local_copy_env must name an environment variable".to_string());
        }

        if self.plot_font_size == 0 {
            return Err("plot_font_size must be > 0".to_string());
        }

        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ReportConfig = toml::from_str(&contents)?;
        config
            .validate()
            .map_err(crate::error::ReportError::Config)?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load configuration from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&contents)?;
        config
            .validate()
            .map_err(crate::error::ReportError::Config)?;
        Ok(config)
    }
}
