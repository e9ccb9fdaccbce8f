//! Configuration types for hound-relay.
//!
//! Everything lives in a single TOML file (`hound-relay.toml` by default):
//!
//! - **server**: bind address
//! - **credentials**: Houndify client id and client key (inline, env or file)
//! - **backend**: text endpoint override and outbound timeout
//! - **request_info**: defaults merged into every outbound query
//! - **conversations**: how many dialogs are remembered, and for how long
//! - **telephony**: TwiML voice, greeting and fallback text

pub mod backend;
pub mod conversations;
pub mod credentials;
pub mod request_info;
pub mod server;
pub mod telephony;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use backend::BackendConfig;
pub use conversations::ConversationConfig;
pub use credentials::{ClientCredential, CredentialsConfig};
pub use request_info::RequestInfoDefaults;
pub use server::ServerConfig;
pub use telephony::TelephonyConfig;

/// Complete hound-relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Houndify client credentials.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Outbound backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Request info defaults for client queries.
    #[serde(default)]
    pub request_info: RequestInfoDefaults,

    /// Conversation state retention.
    #[serde(default)]
    pub conversations: ConversationConfig,

    /// Telephony webhook responses.
    #[serde(default)]
    pub telephony: TelephonyConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no client key configured (set credentials.client_key, client_key_env or client_key_file)")]
    MissingClientKey,
}

impl RelayConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RelayConfig::from_toml("").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8446");
        assert_eq!(config.backend.text_endpoint, crate::headers::DEFAULT_TEXT_ENDPOINT);
        assert!(config.backend.timeout_secs.is_none());
        assert_eq!(config.telephony.voice, "alice");
        assert_eq!(config.conversations.max_entries, 10_000);
        assert_eq!(config.conversations.ttl_secs, 3600);
    }

    #[test]
    fn test_full_config_parses() {
        let config = RelayConfig::from_toml(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [credentials]
            client_id = "my-client"
            client_key = "dGVzdGtleQ"

            [backend]
            text_endpoint = "http://localhost:1234/v1/text"
            timeout_secs = 5

            [request_info]
            user_id = "caller"
            latitude = 1.5
            longitude = -2.5

            [conversations]
            max_entries = 50
            ttl_secs = 60

            [telephony]
            voice = "man"
            greeting = "hi there"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.credentials.client_id, "my-client");
        assert_eq!(config.credentials.client_key.as_deref(), Some("dGVzdGtleQ"));
        assert_eq!(config.backend.text_endpoint, "http://localhost:1234/v1/text");
        assert_eq!(config.backend.timeout_secs, Some(5));
        assert_eq!(config.request_info.user_id, "caller");
        assert_eq!(config.request_info.latitude, Some(1.5));
        assert_eq!(config.telephony.voice, "man");
        assert_eq!(config.telephony.greeting, "hi there");
        assert!(config.telephony.hold_music_url.is_none());
        assert_eq!(config.conversations.max_entries, 50);
        assert_eq!(config.conversations.ttl().as_secs(), 60);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = RelayConfig::from_toml("[server\nbind = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hound-relay.toml");
        std::fs::write(&path, "[credentials]\nclient_id = \"from-file\"\n").unwrap();

        let config = RelayConfig::from_file(&path).unwrap();
        assert_eq!(config.credentials.client_id, "from-file");
    }
}
