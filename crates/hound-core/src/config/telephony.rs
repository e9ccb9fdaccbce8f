//! Telephony webhook responses.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelephonyConfig {
    /// TwiML `<Say>` voice.
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Spoken on `POST /voice`.
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Played after the city greeting on `POST /voice/city`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_music_url: Option<String>,

    /// Sent back when the backend cannot answer.
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
}

fn default_voice() -> String {
    "alice".to_string()
}

fn default_greeting() -> String {
    "hello world!".to_string()
}

fn default_fallback_message() -> String {
    "Sorry, I couldn't answer that right now.".to_string()
}

impl Default for TelephonyConfig {
    fn default() -> Self {
        Self {
            voice: default_voice(),
            greeting: default_greeting(),
            hold_music_url: None,
            fallback_message: default_fallback_message(),
        }
    }
}
