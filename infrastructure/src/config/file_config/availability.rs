//! Registry lookup configuration from TOML (`[availability]` section)

use crate::tools::DEFAULT_LOOKUP_BASE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAvailabilityConfig {
    /// Lookup base; the domain is appended as the last path segment
    pub lookup_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileAvailabilityConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_BASE.to_string(),
            timeout_seconds: 10,
        }
    }
}
