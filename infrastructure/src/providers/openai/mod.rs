//! OpenAI-compatible chat completions provider

pub mod gateway;
pub mod types;

pub use gateway::{OpenAiCompatibleGateway, OpenAiSettings};
