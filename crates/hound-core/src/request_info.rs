//! Request info JSON sent alongside every backend query.

use crate::config::RequestInfoDefaults;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backend-defined metadata describing the context of a query.
///
/// Only the fields hound-relay sets itself are typed; anything else
/// lands in `extra` and is serialized back at the top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestInfo {
    #[serde(rename = "ClientID")]
    pub client_id: String,

    #[serde(rename = "UserID")]
    pub user_id: String,

    #[serde(rename = "RequestID", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_stamp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Opaque dialog state returned by the previous query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_state: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestInfo {
    /// Start from the configured defaults.
    pub fn from_defaults(client_id: impl Into<String>, defaults: &RequestInfoDefaults) -> Self {
        Self {
            client_id: client_id.into(),
            user_id: defaults.user_id.clone(),
            request_id: None,
            time_stamp: None,
            latitude: defaults.latitude,
            longitude: defaults.longitude,
            conversation_state: None,
            extra: defaults.extra.clone(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_conversation_state(mut self, state: Option<Value>) -> Self {
        self.conversation_state = state;
        self
    }
}
