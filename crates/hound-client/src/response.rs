//! Backend response types.
//!
//! Only the fields the relay reads are typed. Everything else is kept in
//! `extra` so the full response can be printed or re-serialized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level text query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HoundResponse {
    /// `"OK"` or `"Error"`.
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default)]
    pub all_results: Vec<CommandResult>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One interpretation of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommandResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken_response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spoken_response_long: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub written_response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_state: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HoundResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }

    pub fn first_result(&self) -> Option<&CommandResult> {
        self.all_results.first()
    }

    /// The short spoken answer of the best result.
    pub fn spoken_response(&self) -> Option<&str> {
        self.first_result()?.spoken_response.as_deref()
    }

    /// The written answer of the best result, falling back to the spoken one.
    pub fn written_response(&self) -> Option<&str> {
        let result = self.first_result()?;
        result
            .written_response
            .as_deref()
            .or(result.spoken_response.as_deref())
    }

    pub fn conversation_state(&self) -> Option<&Value> {
        self.first_result()?.conversation_state.as_ref()
    }
}
