//! Conversation state retention.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Most conversations kept at once. The least recently updated one is
    /// dropped to make room.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Forget a conversation this long after its last turn.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

fn default_max_entries() -> usize {
    10_000
}

fn default_ttl_secs() -> u64 {
    3600
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl ConversationConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
