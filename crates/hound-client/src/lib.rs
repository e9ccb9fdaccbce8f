//! # hound-client
//!
//! Client for the Houndify text query endpoint.
//!
//! [`HoundClient`] authenticates each request with the client key (see
//! `hound-auth`), sends request info built from configured defaults, and
//! carries conversation state between turns for each user.
//!
//! ## Example
//!
//! ```no_run
//! use hound_client::HoundClient;
//! use hound_core::{BackendConfig, ClientCredential, RequestInfoDefaults};
//!
//! # async fn example() -> Result<(), hound_client::ClientError> {
//! let credential = ClientCredential::new("my-client-id", "my-client-key");
//! let client = HoundClient::new(
//!     &credential,
//!     &BackendConfig::default(),
//!     RequestInfoDefaults::default(),
//! )?;
//!
//! let response = client.query("What is the weather here?", None).await?;
//! println!("{}", response.spoken_response().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

pub mod client;
pub mod conversation;
pub mod error;
pub mod response;

pub use client::HoundClient;
pub use conversation::ConversationStore;
pub use error::ClientError;
pub use response::{CommandResult, HoundResponse};

/// Something that can answer a text query.
///
/// Webhook handlers depend on this rather than on [`HoundClient`] directly.
#[async_trait]
pub trait TextQuery: Send + Sync {
    /// Answer `query` for `user_id`, or for the default user when `None`.
    async fn text_query(
        &self,
        query: &str,
        user_id: Option<&str>,
    ) -> Result<HoundResponse, ClientError>;
}
