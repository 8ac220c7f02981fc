use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub use_document_context: bool,
}

/// Body of `/chat`, `/upload` and `/clear` replies.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
}

/// Error body of a non-2xx reply.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Extracts `detail`, whether the server sent a string or a structured value.
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(text) => Some(text),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
