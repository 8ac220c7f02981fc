use super::wire::{ChatReply, ChatRequest, ErrorBody, HealthStatus};
use super::{ApiError, ApiResult, ChatBackend};
use crate::types::UploadFile;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP client for the Sova chat service
pub struct SovaClient {
    client: reqwest::Client,
    base_url: String,
}

impl SovaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Reads the body, mapping non-2xx to [`ApiError::Status`] with the server's `detail`.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = ErrorBody::detail_from(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn required(reply: ChatReply) -> ApiResult<String> {
        reply.response.ok_or_else(|| {
            ApiError::Decode(serde::de::Error::missing_field("response"))
        })
    }
}

#[async_trait(?Send)]
impl ChatBackend for SovaClient {
    async fn send_chat(&self, message: &str, use_document_context: bool) -> ApiResult<String> {
        tracing::debug!(use_document_context, "posting chat message");
        let response = self
            .client
            .post(self.endpoint("chat"))
            .json(&ChatRequest {
                message,
                use_document_context,
            })
            .send()
            .await?;

        Self::required(Self::read_json::<ChatReply>(response).await?)
    }

    async fn upload(&self, file: UploadFile) -> ApiResult<Option<String>> {
        let content_type = file.content_type();
        tracing::debug!(name = %file.name, size = file.bytes.len(), %content_type, "uploading file");

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload"))
            .multipart(form)
            .send()
            .await?;

        let reply = Self::read_json::<ChatReply>(response).await?;
        Ok(reply.response.filter(|text| !text.trim().is_empty()))
    }

    async fn clear(&self) -> ApiResult<String> {
        let response = self.client.post(self.endpoint("clear")).send().await?;
        Self::required(Self::read_json::<ChatReply>(response).await?)
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let response = self.client.get(self.endpoint("health")).send().await?;
        Self::read_json(response).await
    }
}
