//! Infrastructure layer for domain-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod pricing;
pub mod providers;
pub mod tools;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlConversationLogger;
pub use pricing::HttpPriceStreamProvider;
pub use providers::{OpenAiCompatibleGateway, OpenAiSettings};
pub use tools::{AvailabilityCheckerTool, PriceCheckerTool, ToolRegistry};
