//! Wire types for OpenAI-compatible `/chat/completions`
//!
//! Converts domain history and tool definitions into request messages and
//! the response body back into a domain `ModelReply`.

use scout_domain::{
    ChatMessage, MessageHistory, MessagePart, ModelChoice, ModelReply, Role, StopReason,
    ToolDefinition, ToolInvocation,
};
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<WireTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WireMessage {
    fn text(role: &'static str, content: String) -> Self {
        Self {
            role,
            content: Some(content),
            tool_calls: Vec::new(),
            tool_call_id: None,
            name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: WireFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

fn function_kind() -> String {
    "function".to_string()
}

#[derive(Debug, Serialize)]
pub struct WireTool {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: WireFunctionDef,
}

#[derive(Debug, Serialize)]
pub struct WireFunctionDef {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// Advertise domain tool definitions as functions.
pub fn to_wire_tools(tools: &[ToolDefinition]) -> Vec<WireTool> {
    tools
        .iter()
        .map(|t| WireTool {
            kind: "function",
            function: WireFunctionDef {
                name: t.name.clone(),
                description: t.description.clone(),
                parameters: t.parameters_schema(),
            },
        })
        .collect()
}

/// Flatten the history into wire messages.
///
/// Every tool-result part becomes its own `tool` message.
pub fn to_wire_messages(history: &MessageHistory) -> Vec<WireMessage> {
    history.iter().flat_map(to_wire).collect()
}

fn to_wire(message: &ChatMessage) -> Vec<WireMessage> {
    match message.role {
        Role::System => vec![WireMessage::text("system", message.text())],
        Role::Human => vec![WireMessage::text("user", message.text())],
        Role::Assistant => {
            let text = message.text();
            let tool_calls: Vec<WireToolCall> = message
                .invocations()
                .map(|call| WireToolCall {
                    id: call.id.clone(),
                    kind: function_kind(),
                    function: WireFunctionCall {
                        name: call.name.clone(),
                        arguments: call.arguments.clone(),
                    },
                })
                .collect();
            vec![WireMessage {
                role: "assistant",
                content: (!text.is_empty()).then_some(text),
                tool_calls,
                tool_call_id: None,
                name: None,
            }]
        }
        Role::Tool => message
            .parts
            .iter()
            .filter_map(|part| match part {
                MessagePart::ToolResult {
                    invocation_id,
                    tool_name,
                    content,
                } => Some(WireMessage {
                    role: "tool",
                    content: Some(content.clone()),
                    tool_calls: Vec::new(),
                    tool_call_id: Some(invocation_id.clone()),
                    name: Some(tool_name.clone()),
                }),
                _ => None,
            })
            .collect(),
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<WireChoice>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireChoice {
    pub message: WireResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

impl ChatCompletionResponse {
    pub fn into_reply(self) -> ModelReply {
        let choices = self
            .choices
            .into_iter()
            .map(|choice| ModelChoice {
                content: choice.message.content.unwrap_or_default(),
                tool_calls: choice
                    .message
                    .tool_calls
                    .unwrap_or_default()
                    .into_iter()
                    .map(|c| ToolInvocation::new(c.id, c.function.name, c.function.arguments))
                    .collect(),
                stop_reason: choice
                    .finish_reason
                    .as_deref()
                    .map(StopReason::from_finish_reason),
            })
            .collect();

        ModelReply {
            choices,
            model: self.model,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scout_domain::ToolParameter;

    #[test]
    fn test_history_mapping() {
        let mut history = MessageHistory::new();
        history.push(ChatMessage::system("policy"));
        history.push(ChatMessage::human("Generate names"));
        history.push(ChatMessage::tool_calls(&[
            ToolInvocation::new("c1", "price_checker_tool", r#"{"name":"a.com"}"#),
            ToolInvocation::new("c2", "availability_checker_tool", r#"{"name":"a.com"}"#),
        ]));
        history.push(ChatMessage::tool_result("c1", "price_checker_tool", "12.99"));

        let wire = to_wire_messages(&history);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json[0], serde_json::json!({"role": "system", "content": "policy"}));
        assert_eq!(json[1]["role"], "user");
        assert_eq!(json[2]["role"], "assistant");
        assert!(json[2].get("content").is_none());
        assert_eq!(json[2]["tool_calls"][0]["id"], "c1");
        assert_eq!(json[2]["tool_calls"][0]["type"], "function");
        assert_eq!(json[2]["tool_calls"][1]["function"]["name"], "availability_checker_tool");
        assert_eq!(
            json[3],
            serde_json::json!({
                "role": "tool",
                "content": "12.99",
                "tool_call_id": "c1",
                "name": "price_checker_tool"
            })
        );
    }

    #[test]
    fn test_tool_advertisement() {
        let tools = to_wire_tools(&[ToolDefinition::new("price_checker_tool", "price")
            .with_parameter(ToolParameter::new("name", "domain", true))]);
        let json = serde_json::to_value(&tools).unwrap();
        assert_eq!(json[0]["type"], "function");
        assert_eq!(json[0]["function"]["name"], "price_checker_tool");
        assert_eq!(json[0]["function"]["parameters"]["required"][0], "name");
    }

    #[test]
    fn test_response_mapping() {
        let body = r#"{
            "model": "mistral-small",
            "choices": [
                {"message": {"content": null, "tool_calls": [
                    {"id": "c1", "type": "function", "function": {"name": "price_checker_tool", "arguments": "{\"name\":\"a.com\"}"}}
                ]}, "finish_reason": "tool_calls"},
                {"message": {"content": "done"}, "finish_reason": "stop"}
            ]
        }"#;
        let reply = serde_json::from_str::<ChatCompletionResponse>(body)
            .unwrap()
            .into_reply();

        assert_eq!(reply.model.as_deref(), Some("mistral-small"));
        let top = reply.top_choice().unwrap();
        assert_eq!(top.content, "");
        assert_eq!(top.tool_calls[0].domain_argument(), "a.com");
        assert_eq!(top.stop_reason, Some(StopReason::ToolUse));
        assert!(reply.choices[1].is_final());
    }
}
