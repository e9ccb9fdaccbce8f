//! Outbound backend configuration.

use crate::headers::DEFAULT_TEXT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where text queries are sent, by both the proxy and the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Text query endpoint. Override to point at a staging or mock backend.
    #[serde(default = "default_text_endpoint")]
    pub text_endpoint: String,

    /// Outbound request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_text_endpoint() -> String {
    DEFAULT_TEXT_ENDPOINT.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            text_endpoint: default_text_endpoint(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
