//! Request authentication headers for outbound client queries.
//!
//! - `Hound-Request-Authentication: <UserID>;<RequestID>`
//! - `Hound-Client-Authentication: <ClientID>;<Timestamp>;<Signature>`
//!
//! where the signature covers `"<UserID>;<RequestID>" + "<Timestamp>"`.

use crate::signer::SigningKey;
use uuid::Uuid;

/// The authentication header pair for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub request_id: String,
    pub timestamp: i64,
    /// Value of `Hound-Request-Authentication`.
    pub request_authentication: String,
    /// Value of `Hound-Client-Authentication`.
    pub client_authentication: String,
}

impl AuthHeaders {
    /// Headers for a new request: fresh request id, current time.
    pub fn generate(key: &SigningKey, client_id: &str, user_id: &str) -> Self {
        Self::generate_with(
            key,
            client_id,
            user_id,
            &Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp(),
        )
    }

    /// Headers for an explicit request id and timestamp.
    pub fn generate_with(
        key: &SigningKey,
        client_id: &str,
        user_id: &str,
        request_id: &str,
        timestamp: i64,
    ) -> Self {
        let request_authentication = format!("{user_id};{request_id}");
        let signature = key.sign(&format!("{request_authentication}{timestamp}"));
        let client_authentication = format!("{client_id};{timestamp};{signature}");

        Self {
            request_id: request_id.to_string(),
            timestamp,
            request_authentication,
            client_authentication,
        }
    }
}
