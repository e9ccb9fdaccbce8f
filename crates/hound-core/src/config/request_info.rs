//! Defaults merged into the request info of every client query.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestInfoDefaults {
    /// User id used when a query carries no caller identity.
    #[serde(default = "default_user_id")]
    pub user_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Additional request info fields, passed through as-is.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

fn default_user_id() -> String {
    "test_user".to_string()
}

impl Default for RequestInfoDefaults {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            latitude: None,
            longitude: None,
            extra: Map::new(),
        }
    }
}
