//! Final-answer extraction from model output.
//!
//! Pure text handling, no I/O.
//!
//! | Function | Input | Strategy |
//! |----------|-------|----------|
//! | [`extract_agent_response`] | Free-form final turn of a tool run | Brace scanning |
//! | [`parse_structured_domains`] | Schema-constrained output | Strict decoding |

use super::entities::AgentResponse;
use serde::Deserialize;
use thiserror::Error;

/// Run-fatal failures while turning model text into an answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no valid JSON found in response: {0}")]
    NoJsonFound(String),

    #[error("failed to parse response JSON: {0}")]
    MalformedPayload(String),

    #[error("no domains found in response")]
    EmptyResult,
}

/// Extract the [`AgentResponse`] embedded in the model's final message.
///
/// The payload is the text between the first `{` and the last `}` inclusive,
/// so leading or trailing prose is tolerated. Relevance scores are clamped
/// into `0.0..=1.0`; a missing score decodes as `0.0`.
pub fn extract_agent_response(content: &str) -> Result<AgentResponse, ExtractionError> {
    let start = content.find('{');
    let end = content.rfind('}');

    let payload = match (start, end) {
        (Some(start), Some(end)) if start < end => &content[start..=end],
        _ => return Err(ExtractionError::NoJsonFound(content.to_string())),
    };

    let mut response: AgentResponse = serde_json::from_str(payload)
        .map_err(|e| ExtractionError::MalformedPayload(e.to_string()))?;

    if response.domains.is_empty() {
        return Err(ExtractionError::EmptyResult);
    }

    for suggestion in &mut response.domains {
        suggestion.score = suggestion.score.clamp(0.0, 1.0);
    }

    Ok(response)
}

#[derive(Deserialize)]
struct StructuredDomains {
    domains: Vec<String>,
}

/// Decode `{"domains": ["a.com", ...]}` produced under a JSON schema.
///
/// No prose is tolerated here; the backend is expected to honor the schema.
pub fn parse_structured_domains(content: &str) -> Result<Vec<String>, ExtractionError> {
    let decoded: StructuredDomains = serde_json::from_str(content.trim())
        .map_err(|e| ExtractionError::MalformedPayload(e.to_string()))?;

    let domains: Vec<String> = decoded
        .domains
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();

    if domains.is_empty() {
        return Err(ExtractionError::EmptyResult);
    }
    Ok(domains)
}
