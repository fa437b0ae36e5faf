//! Configuration management module
//!
//! Settings only shape presentation and the signature timing policy; the
//! catalog and workflows are not configurable.

use crate::error::{HarnessError, Result};
use crate::types::SignatureTiming;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `PQC_HARNESS_PRECISION=3`
pub const ENV_PREFIX: &str = "PQC_HARNESS";

/// Largest number of decimals accepted for elapsed-time output
pub const MAX_PRECISION: usize = 9;

/// How run reports are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per run
    Json,
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessSettings {
    /// Steps of the signature workflow inside the timed window
    pub signature_timing: SignatureTiming,

    /// Decimals printed for elapsed seconds
    pub precision: usize,

    /// Print key/ciphertext/signature sizes and secret fingerprints
    pub show_details: bool,

    /// Report format
    pub output_format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            signature_timing: SignatureTiming::SigningOnly,
            precision: 6,
            show_details: false,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/// Load settings from an optional file plus `PQC_HARNESS_*` environment variables
///
/// Environment variables override file values. Missing keys fall back to
/// [`HarnessSettings::default`].
///
/// # Errors
/// - `Config` if the file cannot be read or parsed, or validation fails
pub fn load_settings(config_path: Option<&Path>) -> Result<HarnessSettings> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .map_err(|e| HarnessError::Config(format!("Failed to load settings: {}", e)))?;

    let settings: HarnessSettings = config
        .try_deserialize()
        .map_err(|e| HarnessError::Config(format!("Failed to parse settings: {}", e)))?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Check value ranges
pub fn validate_settings(settings: &HarnessSettings) -> Result<()> {
    if settings.precision > MAX_PRECISION {
        return Err(HarnessError::Config(format!(
            "precision must be at most {}, got {}",
            MAX_PRECISION, settings.precision
        )));
    }

    parse_log_level(&settings.log_level)?;

    Ok(())
}

/// Map a configured log level name onto a `tracing` level
pub fn parse_log_level(log_level: &str) -> Result<tracing::Level> {
    match log_level.to_lowercase().as_str() {
        "trace" => Ok(tracing::Level::TRACE),
        "debug" => Ok(tracing::Level::DEBUG),
        "info" => Ok(tracing::Level::INFO),
        "warn" => Ok(tracing::Level::WARN),
        "error" => Ok(tracing::Level::ERROR),
        _ => Err(HarnessError::Config(format!("Unknown log level: {}", log_level))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = HarnessSettings::default();
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.signature_timing, SignatureTiming::SigningOnly);
    }

    #[test]
    fn test_invalid_precision() {
        let settings = HarnessSettings {
            precision: 12,
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let settings = HarnessSettings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_err());

        let settings = HarnessSettings {
            log_level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_default_log_level_hides_debug() {
        let level = parse_log_level(&HarnessSettings::default().log_level).unwrap();
        assert_eq!(level, tracing::Level::WARN);
        assert!(tracing::Level::DEBUG > level);
    }
}
