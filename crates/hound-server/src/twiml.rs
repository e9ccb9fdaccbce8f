//! Minimal TwiML rendering for the webhook replies.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use std::fmt::Write as _;

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Reply to an inbound SMS.
#[derive(Debug, Clone, Default)]
pub struct MessagingResponse {
    messages: Vec<String>,
}

impl MessagingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, body: impl Into<String>) -> Self {
        self.messages.push(body.into());
        self
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::from(PROLOG);
        if self.messages.is_empty() {
            out.push_str("<Response/>");
            return out;
        }
        out.push_str("<Response>");
        for message in &self.messages {
            let _ = write!(out, "<Message>{}</Message>", escape(message));
        }
        out.push_str("</Response>");
        out
    }
}

#[derive(Debug, Clone)]
enum Verb {
    Say { voice: Option<String>, text: String },
    Play { url: String },
}

/// Reply to an inbound call.
#[derive(Debug, Clone, Default)]
pub struct VoiceResponse {
    verbs: Vec<Verb>,
}

impl VoiceResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(mut self, voice: Option<&str>, text: impl Into<String>) -> Self {
        self.verbs.push(Verb::Say {
            voice: voice.filter(|v| !v.is_empty()).map(str::to_string),
            text: text.into(),
        });
        self
    }

    pub fn play(mut self, url: impl Into<String>) -> Self {
        self.verbs.push(Verb::Play { url: url.into() });
        self
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::from(PROLOG);
        if self.verbs.is_empty() {
            out.push_str("<Response/>");
            return out;
        }
        out.push_str("<Response>");
        for verb in &self.verbs {
            let _ = match verb {
                Verb::Say {
                    voice: Some(voice),
                    text,
                } => write!(out, r#"<Say voice="{}">{}</Say>"#, escape(voice), escape(text)),
                Verb::Say { voice: None, text } => write!(out, "<Say>{}</Say>", escape(text)),
                Verb::Play { url } => write!(out, "<Play>{}</Play>", escape(url)),
            };
        }
        out.push_str("</Response>");
        out
    }
}

/// Escape XML text and attribute content.
///
/// Characters XML 1.0 cannot carry at all (most C0 controls, U+FFFE and
/// U+FFFF) are dropped.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.chars().any(|c| needs_escape(c) || !is_xml_char(c)) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            c if !is_xml_char(c) => {}
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn xml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "text/xml")], body).into_response()
}

impl IntoResponse for MessagingResponse {
    fn into_response(self) -> Response {
        xml_response(self.to_xml())
    }
}

impl IntoResponse for VoiceResponse {
    fn into_response(self) -> Response {
        xml_response(self.to_xml())
    }
}
