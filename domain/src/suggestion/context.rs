//! Request context bag and its recognized fields

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keys the prompt builders understand. Anything else is ignored.
pub const PREFERRED_TLDS: &str = "preferred_tlds";
pub const EXCLUDED_TLDS: &str = "excluded_tlds";
pub const BRAND_KEYWORDS: &str = "brand_keywords";
pub const BUSINESS_TYPE: &str = "business_type";
pub const LOCATION: &str = "location";

/// Open key/value bag attached to a suggestion request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionContext(BTreeMap<String, serde_json::Value>);

impl SuggestionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// String value for `key`; missing or non-string values yield `""`.
    pub fn string(&self, key: &str) -> &str {
        self.0.get(key).and_then(|v| v.as_str()).unwrap_or("")
    }

    pub fn fields(&self) -> ContextFields<'_> {
        ContextFields {
            preferred_tlds: self.string(PREFERRED_TLDS),
            excluded_tlds: self.string(EXCLUDED_TLDS),
            brand_keywords: self.string(BRAND_KEYWORDS),
            business_type: self.string(BUSINESS_TYPE),
            location: self.string(LOCATION),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, serde_json::Value)> for SuggestionContext {
    fn from_iter<I: IntoIterator<Item = (String, serde_json::Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The recognized context fields, borrowed from a [`SuggestionContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextFields<'a> {
    pub preferred_tlds: &'a str,
    pub excluded_tlds: &'a str,
    pub brand_keywords: &'a str,
    pub business_type: &'a str,
    pub location: &'a str,
}

impl ContextFields<'_> {
    pub fn has_context(&self) -> bool {
        [
            self.preferred_tlds,
            self.excluded_tlds,
            self.brand_keywords,
            self.business_type,
            self.location,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }

    /// Render the set fields as a bulleted prompt section.
    pub fn format_section(&self) -> String {
        let lines: Vec<String> = [
            ("Preferred TLDs", self.preferred_tlds),
            ("Excluded TLDs", self.excluded_tlds),
            ("Business type", self.business_type),
            ("Location focus", self.location),
            ("Brand keywords to include", self.brand_keywords),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("- {}: {}", label, value))
        .collect();

        if lines.is_empty() {
            return "- No additional constraints were provided.".to_string();
        }
        lines.join("\n")
    }
}
