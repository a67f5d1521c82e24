//! Thin Gemini REST client.
//!
//! Two call shapes, matching the two advisory modes: an SSE stream for
//! the coach chat, and a single structured-JSON generation for audits.
//! No retries anywhere: a failed request is terminal for that action.

use crate::errors::{AppError, AppResult};
use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::json;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn of the in-memory chat transcript (append-only, lives only
/// for the duration of the interactive session).
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

// ---------------------------------------------------------------------------
// Wire types (the subset we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() { None } else { Some(joined) }
    }
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint (local stub servers).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn contents(history: &[ChatTurn], message: &str) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|t| {
                json!({
                    "role": t.role.as_str(),
                    "parts": [{"text": t.text}],
                })
            })
            .collect();
        contents.push(json!({
            "role": "user",
            "parts": [{"text": message}],
        }));
        json!(contents)
    }

    /// Stream a chat reply over SSE, invoking `on_delta` for every text
    /// chunk as it arrives. Returns the assembled full reply.
    pub async fn stream_chat<F>(
        &self,
        system: &str,
        history: &[ChatTurn],
        message: &str,
        mut on_delta: F,
    ) -> AppResult<String>
    where
        F: FnMut(&str),
    {
        let url = format!(
            "{}/{}:streamGenerateContent?alt=sse&key={}",
            self.base_url, self.model, self.api_key
        );
        let body = json!({
            "system_instruction": {"parts": [{"text": system}]},
            "contents": Self::contents(history, message),
        });

        let resp = self.http.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Advisor(format!("HTTP {}: {}", status, text)));
        }

        let mut stream = resp.bytes_stream();
        let mut buf = String::new();
        let mut full = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buf.push_str(&String::from_utf8_lossy(&chunk));

            // SSE frames are newline-delimited; payload lines carry "data:"
            while let Some(pos) = buf.find('\n') {
                let line = buf[..pos].trim().to_string();
                buf.drain(..=pos);

                let Some(data) = line.strip_prefix("data:") else {
                    continue;
                };
                let data = data.trim();
                if data.is_empty() || data == "[DONE]" {
                    continue;
                }

                let parsed: GenerateContentResponse = serde_json::from_str(data)
                    .map_err(|_| AppError::Advisor(data.to_string()))?;
                if let Some(text) = parsed.first_text() {
                    on_delta(&text);
                    full.push_str(&text);
                }
            }
        }

        Ok(full)
    }

    /// Single-shot generation with a JSON response MIME type. Returns the
    /// raw candidate text; the caller owns the strict parse.
    pub async fn generate_json(&self, system: &str, user: &str) -> AppResult<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = json!({
            "system_instruction": {"parts": [{"text": system}]},
            "contents": [{"role": "user", "parts": [{"text": user}]}],
            "generationConfig": {"response_mime_type": "application/json"},
        });

        let resp = self.http.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Advisor(format!("HTTP {}: {}", status, text)));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        parsed
            .first_text()
            .ok_or_else(|| AppError::Advisor("empty reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_joins_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Hel"},{"text":"lo"}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("Hello"));
    }

    #[test]
    fn first_text_empty_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(resp.first_text(), None);
    }

    #[test]
    fn contents_appends_new_message_last() {
        let history = vec![
            ChatTurn { role: Role::User, text: "hi".into() },
            ChatTurn { role: Role::Model, text: "hello".into() },
        ];
        let v = GeminiClient::contents(&history, "how am I doing?");
        let arr = v.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[1]["role"], "model");
        assert_eq!(arr[2]["parts"][0]["text"], "how am I doing?");
    }
}
