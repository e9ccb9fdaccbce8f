//! Authenticated text query client.

use crate::TextQuery;
use crate::conversation::ConversationStore;
use crate::error::ClientError;
use crate::response::HoundResponse;
use async_trait::async_trait;
use hound_auth::{AuthHeaders, SigningKey};
use hound_core::{BackendConfig, ClientCredential, RequestInfo, RequestInfoDefaults, headers};
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Client for the backend text endpoint.
///
/// Signs every request with the client key, attaches request info built
/// from the configured defaults, and remembers conversation state per user.
pub struct HoundClient {
    http: reqwest::Client,
    client_id: String,
    signing_key: SigningKey,
    text_endpoint: Url,
    defaults: RequestInfoDefaults,
    conversations: ConversationStore,
}

// Custom Debug implementation to avoid exposing the client key
impl std::fmt::Debug for HoundClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoundClient")
            .field("client_id", &self.client_id)
            .field("signing_key", &"[REDACTED]")
            .field("text_endpoint", &self.text_endpoint.as_str())
            .finish_non_exhaustive()
    }
}

impl HoundClient {
    pub fn new(
        credential: &ClientCredential,
        backend: &BackendConfig,
        defaults: RequestInfoDefaults,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = backend.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let signing_key = SigningKey::from_credential(credential)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        let text_endpoint = Url::parse(&backend.text_endpoint).map_err(|e| {
            ClientError::Config(format!("invalid text endpoint {}: {e}", backend.text_endpoint))
        })?;

        Ok(Self {
            http,
            client_id: credential.client_id().to_string(),
            signing_key,
            text_endpoint,
            defaults,
            conversations: ConversationStore::new(),
        })
    }

    /// Share conversation state with another component.
    pub fn with_conversations(mut self, conversations: ConversationStore) -> Self {
        self.conversations = conversations;
        self
    }

    pub fn conversations(&self) -> &ConversationStore {
        &self.conversations
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Send `query` on behalf of `user_id` (or the configured default user).
    #[tracing::instrument(skip(self, query), fields(query_len = query.len()))]
    pub async fn query(
        &self,
        query: &str,
        user_id: Option<&str>,
    ) -> Result<HoundResponse, ClientError> {
        let user_id = user_id
            .filter(|u| !u.is_empty())
            .unwrap_or(self.defaults.user_id.as_str())
            .to_string();

        let auth = AuthHeaders::generate(&self.signing_key, &self.client_id, &user_id);
        let state = self.conversations.get(&user_id).await;

        let mut info = RequestInfo::from_defaults(&self.client_id, &self.defaults)
            .with_user_id(&user_id)
            .with_conversation_state(state);
        info.request_id = Some(auth.request_id.clone());
        info.time_stamp = Some(auth.timestamp);

        let request_headers = request_headers(&info, &auth)?;

        tracing::debug!(request_id = %auth.request_id, "sending text query");
        let resp = self
            .http
            .get(self.text_endpoint.clone())
            .query(&[("query", query)])
            .headers(request_headers)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let response: HoundResponse = serde_json::from_slice(&body)?;
        if !response.is_ok() {
            let message = response
                .error_message
                .clone()
                .unwrap_or_else(|| format!("status {}", response.status));
            tracing::warn!(request_id = %auth.request_id, error = %message, "backend rejected query");
            return Err(ClientError::Backend(message));
        }

        if let Some(state) = response.conversation_state() {
            self.conversations.set(user_id, state.clone()).await;
        }

        Ok(response)
    }
}

#[async_trait]
impl TextQuery for HoundClient {
    async fn text_query(
        &self,
        query: &str,
        user_id: Option<&str>,
    ) -> Result<HoundResponse, ClientError> {
        self.query(query, user_id).await
    }
}

fn request_headers(info: &RequestInfo, auth: &AuthHeaders) -> Result<HeaderMap, ClientError> {
    let info_json = serde_json::to_string(info)?;

    let mut map = HeaderMap::new();
    for (name, value) in [
        (headers::REQUEST_INFO, info_json.as_str()),
        (headers::REQUEST_AUTHENTICATION, auth.request_authentication.as_str()),
        (headers::CLIENT_AUTHENTICATION, auth.client_authentication.as_str()),
    ] {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ClientError::Header(format!("{name}: {e}")))?;
        let value = HeaderValue::from_bytes(value.as_bytes())
            .map_err(|e| ClientError::Header(format!("{name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
