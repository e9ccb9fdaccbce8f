//! # hound-core
//!
//! Types shared by every hound-relay crate:
//!
//! - [`RelayConfig`] and its sections, loaded from `hound-relay.toml`
//! - [`ClientCredential`], the resolved client id / client key pair
//! - [`RequestInfo`], the JSON metadata sent with each backend query
//! - [`headers`], the `Hound-*` header names used on the wire

// Configuration types shared across all hound-relay crates
pub mod config;
pub mod headers;
pub mod request_info;

pub use config::{
    BackendConfig, ClientCredential, ConfigError, ConversationConfig, CredentialsConfig, RelayConfig,
    RequestInfoDefaults, ServerConfig, TelephonyConfig,
};
pub use request_info::RequestInfo;
