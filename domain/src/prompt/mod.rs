//! Prompt domain
//!
//! Templates for the opening turns of agent and plain suggestion runs.

mod template;

pub use template::{PLAIN_DEFAULT_MAX_RESULTS, SuggestionPrompt};
