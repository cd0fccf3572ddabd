//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod availability;
mod llm;
mod logging;
mod pricing;

pub use availability::FileAvailabilityConfig;
pub use llm::{DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, FileLlmConfig};
pub use logging::FileLoggingConfig;
pub use pricing::FilePricingConfig;

use scout_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("{0}.timeout_seconds cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("llm.temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f32),
}

/// `[output]`: how suggestions are rendered when the CLI does not say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// The `--output` flag wins over the file, which wins over the table default.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.format).unwrap_or_default()
    }

    /// JSON output is never colored so it stays machine-readable.
    pub fn use_color(&self, format: OutputFormat) -> bool {
        self.color && format == OutputFormat::Table
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub llm: FileLlmConfig,
    pub pricing: FilePricingConfig,
    pub availability: FileAvailabilityConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every detected problem.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.llm.model.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.llm.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout("llm"));
        }
        if self.availability.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout("availability"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            issues.push(ConfigValidationError::InvalidTemperature(
                self.llm.temperature,
            ));
        }

        issues
    }
}
