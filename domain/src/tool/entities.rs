//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Definition of a tool advertised to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the tool, used as the dispatch key (e.g., "price_checker_tool")
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// JSON Schema object describing the parameters.
    ///
    /// Type hints map to JSON Schema types; unknown hints fall back to `"string"`.
    pub fn parameters_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in &self.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(serde_json::json!(param.name));
            }
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// A model-issued request to run a tool.
///
/// `arguments` is the raw argument string exactly as the model produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Model-assigned ID used to key the tool result
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Raw argument string
    pub arguments: String,
}

impl ToolInvocation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// The domain this invocation targets.
    ///
    /// Tools advertise a single `name` parameter, so a JSON object argument
    /// yields its `name` field. Anything else is taken verbatim.
    pub fn domain_argument(&self) -> String {
        if let Ok(serde_json::Value::Object(args)) =
            serde_json::from_str::<serde_json::Value>(&self.arguments)
            && let Some(serde_json::Value::String(name)) = args.get("name")
        {
            return name.clone();
        }
        self.arguments.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("price_checker_tool", "Check a price").with_parameter(
            ToolParameter::new("name", "Full domain name", true),
        );

        assert_eq!(tool.name, "price_checker_tool");
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].param_type, "string");
    }

    #[test]
    fn test_parameters_schema() {
        let tool = ToolDefinition::new("lookup", "Lookup")
            .with_parameter(ToolParameter::new("name", "Domain", true))
            .with_parameter(ToolParameter::new("limit", "Max rows", false).with_type("integer"));

        let schema = tool.parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["name"]["description"], "Domain");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");

        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "name");
    }

    #[test]
    fn test_domain_argument_from_json_object() {
        let call = ToolInvocation::new("call_1", "price_checker_tool", r#"{"name":"escobar.com"}"#);
        assert_eq!(call.domain_argument(), "escobar.com");
    }

    #[test]
    fn test_domain_argument_verbatim_fallback() {
        let call = ToolInvocation::new("call_1", "availability_checker_tool", "Escobar.COM ");
        assert_eq!(call.domain_argument(), "Escobar.COM ");

        let call = ToolInvocation::new("call_2", "availability_checker_tool", r#"{"domain":"x.io"}"#);
        assert_eq!(call.domain_argument(), r#"{"domain":"x.io"}"#);
    }
}
