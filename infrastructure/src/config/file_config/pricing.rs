//! Price service configuration from TOML (`[pricing]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePricingConfig {
    /// Base URL of the streaming price service; the price tool is disabled when unset
    pub endpoint: Option<String>,
    /// Requested currency code
    pub currency: String,
}

impl Default for FilePricingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            currency: "USD".to_string(),
        }
    }
}
