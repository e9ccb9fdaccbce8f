//! Houndify client credentials.

use super::ConfigError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where to find the client id and client key.
///
/// The key is resolved from, in order of precedence:
/// 1. the environment variable named by `client_key_env`
/// 2. the file at `client_key_file`
/// 3. the inline `client_key`
#[derive(Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// Public client identifier.
    #[serde(default)]
    pub client_id: String,

    /// Base64url client key. Prefer `client_key_env` outside development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,

    /// Environment variable containing the client key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_env: Option<String>,

    /// Path to a file containing the client key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_file: Option<PathBuf>,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id)
            .field("client_key", &self.client_key.as_ref().map(|_| "[REDACTED]"))
            .field("client_key_env", &self.client_key_env)
            .field("client_key_file", &self.client_key_file)
            .finish()
    }
}

impl CredentialsConfig {
    /// Resolve the client key and pair it with the client id.
    pub fn resolve(&self) -> Result<ClientCredential, ConfigError> {
        let key = self.resolve_client_key()?.ok_or(ConfigError::MissingClientKey)?;
        Ok(ClientCredential::new(self.client_id.clone(), key))
    }

    /// Resolve the client key from environment, file, or inline value.
    pub fn resolve_client_key(&self) -> Result<Option<String>, ConfigError> {
        // Try environment variable first
        if let Some(env_var) = &self.client_key_env {
            if let Ok(key) = std::env::var(env_var) {
                let key = key.trim();
                if !key.is_empty() {
                    return Ok(Some(key.to_string()));
                }
            }
        }

        // Try file path
        if let Some(path) = &self.client_key_file {
            if path.exists() {
                let key = std::fs::read_to_string(path)?;
                let key = key.trim();
                if !key.is_empty() {
                    return Ok(Some(key.to_string()));
                }
            }
        }

        Ok(self
            .client_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty()))
    }
}

/// A registered caller identity: public id plus secret key.
///
/// The key is held as a [`SecretString`] so it never shows up in `Debug`
/// output or logs.
pub struct ClientCredential {
    client_id: String,
    client_key: SecretString,
}

impl ClientCredential {
    pub fn new(client_id: impl Into<String>, client_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_key: SecretString::from(client_key.into()),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn expose_client_key(&self) -> &str {
        self.client_key.expose_secret()
    }
}

impl fmt::Debug for ClientCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredential")
            .field("client_id", &self.client_id)
            .field("client_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_key() {
        let cfg = CredentialsConfig {
            client_id: "id".to_string(),
            client_key: Some(" dGVzdGtleQ \n".to_string()),
            ..Default::default()
        };
        let cred = cfg.resolve().unwrap();
        assert_eq!(cred.client_id(), "id");
        assert_eq!(cred.expose_client_key(), "dGVzdGtleQ");
    }

    #[test]
    fn test_missing_key() {
        let cfg = CredentialsConfig {
            client_id: "id".to_string(),
            ..Default::default()
        };
        assert!(matches!(cfg.resolve(), Err(ConfigError::MissingClientKey)));
    }

    #[test]
    fn test_env_takes_precedence_over_file_and_inline() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("client_key");
        std::fs::write(&key_file, "from-file\n").unwrap();

        // SAFETY: We're in a test and controlling the environment
        unsafe {
            std::env::set_var("HOUND_TEST_KEY_PRECEDENCE", "from-env");
        }

        let cfg = CredentialsConfig {
            client_id: "id".to_string(),
            client_key: Some("inline".to_string()),
            client_key_env: Some("HOUND_TEST_KEY_PRECEDENCE".to_string()),
            client_key_file: Some(key_file.clone()),
        };
        assert_eq!(cfg.resolve_client_key().unwrap().as_deref(), Some("from-env"));

        // SAFETY: Cleanup in test
        unsafe {
            std::env::remove_var("HOUND_TEST_KEY_PRECEDENCE");
        }

        assert_eq!(cfg.resolve_client_key().unwrap().as_deref(), Some("from-file"));

        let cfg = CredentialsConfig {
            client_key_file: Some(dir.path().join("missing")),
            ..cfg
        };
        assert_eq!(cfg.resolve_client_key().unwrap().as_deref(), Some("inline"));
    }

    #[test]
    fn test_blank_key_file_is_not_a_key() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("client_key");
        std::fs::write(&key_file, "\n").unwrap();

        let cfg = CredentialsConfig {
            client_id: "id".to_string(),
            client_key_file: Some(key_file.clone()),
            ..Default::default()
        };
        assert!(matches!(cfg.resolve(), Err(ConfigError::MissingClientKey)));

        let cfg = CredentialsConfig {
            client_key: Some("inline".to_string()),
            ..cfg
        };
        assert_eq!(cfg.resolve_client_key().unwrap().as_deref(), Some("inline"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let cred = ClientCredential::new("id", "super-secret");
        let debug = format!("{cred:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));

        let cfg = CredentialsConfig {
            client_id: "id".to_string(),
            client_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        assert!(!format!("{cfg:?}").contains("super-secret"));
    }
}
