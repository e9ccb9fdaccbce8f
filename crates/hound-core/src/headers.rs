//! Header names used by the Houndify text endpoint.
//!
//! Inbound lookups go through `http`, which lowercases names, so the
//! canonical casing here only matters on the outbound side.

pub const REQUEST_AUTHENTICATION: &str = "Hound-Request-Authentication";
pub const CLIENT_AUTHENTICATION: &str = "Hound-Client-Authentication";
pub const REQUEST_INFO: &str = "Hound-Request-Info";
pub const INPUT_LANGUAGE_ENGLISH_NAME: &str = "Hound-Input-Language-English-Name";
pub const INPUT_LANGUAGE_IETF_TAG: &str = "Hound-Input-Language-IETF-Tag";

/// Production text query endpoint.
pub const DEFAULT_TEXT_ENDPOINT: &str = "https://api.houndify.com/v1/text";
