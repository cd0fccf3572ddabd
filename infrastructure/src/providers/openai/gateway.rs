//! OpenAI-compatible chat completions gateway
//!
//! Works against any backend exposing `POST {endpoint}/chat/completions`
//! (OpenAI, Mistral, local servers). Errors are mapped to [`GatewayError`]
//! and returned as-is; nothing is retried here.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, to_wire_messages, to_wire_tools};
use async_trait::async_trait;
use scout_application::ports::llm_gateway::{GatewayError, LlmGateway};
use scout_domain::{MessageHistory, ModelReply, ToolDefinition};
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`OpenAiCompatibleGateway`]
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: Option<f32>,
    pub timeout: Duration,
}

pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiCompatibleGateway {
    pub fn new(settings: OpenAiSettings) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.endpoint.trim_end_matches('/'))
    }

    async fn send(&self, request: &ChatCompletionRequest<'_>) -> Result<ModelReply, GatewayError> {
        let mut builder = self.client.post(self.completions_url()).json(request);
        if let Some(key) = self.settings.api_key.as_deref().filter(|k| !k.is_empty()) {
            builder = builder.bearer_auth(key);
        }

        debug!(
            model = request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Sending chat completion request"
        );

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout
            } else {
                GatewayError::ConnectionError(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited(body));
        }
        if !status.is_success() {
            return Err(GatewayError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(parsed.into_reply())
    }
}

#[async_trait]
impl LlmGateway for OpenAiCompatibleGateway {
    async fn generate(
        &self,
        history: &MessageHistory,
        tools: &[ToolDefinition],
    ) -> Result<ModelReply, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: to_wire_messages(history),
            temperature: self.settings.temperature,
            tools: to_wire_tools(tools),
            response_format: None,
        };
        self.send(&request).await
    }

    async fn generate_structured(
        &self,
        history: &MessageHistory,
        schema_name: &str,
        schema: &serde_json::Value,
    ) -> Result<ModelReply, GatewayError> {
        let request = ChatCompletionRequest {
            model: &self.settings.model,
            messages: to_wire_messages(history),
            temperature: self.settings.temperature,
            tools: Vec::new(),
            response_format: Some(serde_json::json!({
                "type": "json_schema",
                "json_schema": { "name": schema_name, "schema": schema },
            })),
        };
        self.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::{ChatMessage, ToolParameter};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(endpoint: &str) -> OpenAiCompatibleGateway {
        OpenAiCompatibleGateway::new(OpenAiSettings {
            endpoint: endpoint.to_string(),
            api_key: Some("sk-test".to_string()),
            model: "mistral-small-latest".to_string(),
            temperature: Some(0.7),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn history() -> MessageHistory {
        MessageHistory::seeded("Generate 10 names")
    }

    #[tokio::test]
    async fn test_generate_sends_history_and_tools() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "mistral-small-latest",
                "messages": [{"role": "user", "content": "Generate 10 names"}],
                "tools": [{"type": "function", "function": {"name": "price_checker_tool"}}],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "{\"domains\": []}"}, "finish_reason": "stop"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tools = vec![ToolDefinition::new("price_checker_tool", "price")
            .with_parameter(ToolParameter::new("name", "domain", true))];
        let reply = gateway(&format!("{}/v1", server.uri()))
            .generate(&history(), &tools)
            .await
            .unwrap();

        assert_eq!(reply.top_choice().unwrap().content, "{\"domains\": []}");
    }

    #[tokio::test]
    async fn test_structured_sends_response_format() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "response_format": {"type": "json_schema", "json_schema": {"name": "domain_suggestions"}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"content": "{\"domains\": [\"a.com\"]}"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut history = MessageHistory::new();
        history.push(ChatMessage::system("policy"));
        history.push(ChatMessage::human("names"));
        let reply = gateway(&server.uri())
            .generate_structured(
                &history,
                "domain_suggestions",
                &serde_json::json!({"type": "object"}),
            )
            .await
            .unwrap();
        assert_eq!(reply.choices.len(), 1);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway(&server.uri())
            .generate(&history(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::RateLimited(ref body) if body == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = gateway(&server.uri())
            .generate(&history(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::RequestFailed { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = gateway(&server.uri())
            .generate(&history(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_error() {
        let err = gateway("http://127.0.0.1:1")
            .generate(&history(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }
}
