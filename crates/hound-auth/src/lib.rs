//! # hound-auth
//!
//! Token signing for the Houndify client-key scheme.
//!
//! This crate provides:
//! - [`sign`]: HMAC-SHA256 of a token keyed by a base64url client key,
//!   returned as base64url
//! - [`SigningKey`]: a client key decoded once and reused for every signature
//! - [`AuthHeaders`]: the `Hound-Request-Authentication` and
//!   `Hound-Client-Authentication` pair sent with client queries
//!
//! ## Signature format
//!
//! | Step | Input | Output |
//! |------|-------|--------|
//! | Key decode | base64url client key (`-` `_`, padding optional) | raw key bytes |
//! | MAC | UTF-8 token bytes | 32-byte HMAC-SHA256 digest |
//! | Encode | digest | standard base64 with `+`→`-`, `/`→`_` (padding kept) |
//!
//! Signing is pure: no I/O, no shared state. A [`SigningKey`] can be shared
//! across tasks without locking.

pub mod error;
pub mod headers;
pub mod signer;

pub use error::SignError;
pub use headers::AuthHeaders;
pub use signer::{SigningKey, base64_url_decode, base64_url_encode, sign};
