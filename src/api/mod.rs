/// Chat API module for Sova
///
/// This module talks to the remote chat service: plain-text chat turns,
/// document uploads, conversation reset and a health check.
///
/// # Architecture
///
/// - `client` - reqwest-backed [`SovaClient`]
/// - `wire` - JSON request/response shapes
///
/// The controller only sees the [`ChatBackend`] trait, so tests can swap the
/// network for an in-process double.
///
/// # Usage
///
/// ```rust,no_run
/// use sova::api::{ChatBackend, SovaClient};
///
/// # async fn example() -> sova::api::ApiResult<()> {
/// let client = SovaClient::new("http://localhost:8000/api");
/// let reply = client.send_chat("Hello!", false).await?;
/// # Ok(())
/// # }
/// ```
mod client;
mod wire;

use crate::types::UploadFile;
use async_trait::async_trait;

pub use client::SovaClient;
pub use wire::{ChatReply, ChatRequest, ErrorBody, HealthStatus};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Outbound calls the widget makes.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn send_chat(&self, message: &str, use_document_context: bool) -> ApiResult<String>;

    /// Returns the server acknowledgement; `None` if it sent none.
    async fn upload(&self, file: UploadFile) -> ApiResult<Option<String>>;

    async fn clear(&self) -> ApiResult<String>;

    async fn health(&self) -> ApiResult<HealthStatus>;
}
