use hound_auth::SigningKey;
use hound_client::{ConversationStore, HoundClient, TextQuery};
use hound_core::{RelayConfig, TelephonyConfig};
use hound_proxy::ProxyState;
use std::sync::Arc;

/// Shared application state.
///
/// Everything here is read-only after startup except the conversation
/// store inside the query client.
pub struct AppState {
    pub cfg: RelayConfig,
    pub client: Arc<dyn TextQuery>,
    pub proxy: Arc<ProxyState>,
}

impl AppState {
    /// Resolve credentials and build the outbound clients.
    ///
    /// A missing or malformed client key fails here, before anything is
    /// served.
    pub fn init(cfg: &RelayConfig) -> anyhow::Result<Self> {
        let credential = cfg.credentials.resolve()?;
        let signing_key = SigningKey::from_credential(&credential)
            .map_err(|e| anyhow::anyhow!("invalid client key: {e}"))?;

        let client = HoundClient::new(&credential, &cfg.backend, cfg.request_info.clone())?
            .with_conversations(ConversationStore::from_config(&cfg.conversations));
        let proxy = ProxyState::new(signing_key, &cfg.backend)?;

        tracing::info!(
            client_id = %credential.client_id(),
            backend = %cfg.backend.text_endpoint,
            "initialized relay state"
        );

        Ok(Self::new(cfg.clone(), Arc::new(client), Arc::new(proxy)))
    }

    pub fn new(cfg: RelayConfig, client: Arc<dyn TextQuery>, proxy: Arc<ProxyState>) -> Self {
        Self { cfg, client, proxy }
    }

    pub fn telephony(&self) -> &TelephonyConfig {
        &self.cfg.telephony
    }
}
