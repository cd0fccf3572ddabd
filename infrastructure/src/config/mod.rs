//! Configuration file loading for domain-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DOMAIN_SCOUT_*` environment variables
//! 2. `AI_ENDPOINT`, `AI_API_KEY`, `AI_MODEL`, `PRICE_SERVICE_ADDR`
//! 3. `--config <path>` specified file
//! 4. Project root: `./domain-scout.toml` or `./.domain-scout.toml`
//! 5. Global: `<config dir>/domain-scout/config.toml`
//! 6. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL,
    FileAvailabilityConfig, FileConfig, FileLlmConfig, FileLoggingConfig, FileOutputConfig,
    FilePricingConfig,
};
pub use loader::ConfigLoader;
