//! Model service configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`)
    pub endpoint: String,
    pub model: String,
    /// Bearer token; usually supplied via `AI_API_KEY`
    pub api_key: Option<String>,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            model: DEFAULT_LLM_MODEL.to_string(),
            api_key: None,
            temperature: 0.7,
            timeout_seconds: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: FileLlmConfig = toml::from_str(r#"model = "mistral-small-latest""#).unwrap();
        assert_eq!(config.model, "mistral-small-latest");
        assert_eq!(config.endpoint, DEFAULT_LLM_ENDPOINT);
        assert_eq!(config.timeout_seconds, 60);
        assert!(config.api_key.is_none());
    }
}
