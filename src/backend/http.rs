//! HTTP backend for the remote chunk service.

use super::{BackendError, ChunkBackend};
use crate::chunks::{Chunk, ModelInfo};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const USER_AGENT: &str = concat!("chunklist/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct ChunkListResponse {
    chunks: Vec<Chunk>,
}

#[derive(Serialize)]
struct UpdateChunkBody<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct GenerateQuestionsBody<'a> {
    model: &'a ModelInfo,
}

#[derive(Deserialize)]
struct GenerateQuestionsResponse {
    #[serde(default)]
    questions: Vec<serde_json::Value>,
}

/// Chunk service reached over HTTP with JSON bodies.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: &str, api_token: Option<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| BackendError::InvalidData(format!("Invalid service URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidData(format!("Invalid service URL {}", base_url)));
        }

        Ok(Self {
            client,
            base_url,
            api_token,
        })
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `{base}/api/projects/{project_id}/chunks`
    #[must_use]
    pub fn chunks_url(&self, project_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "chunks"])
    }

    /// `{base}/api/projects/{project_id}/chunks/{chunk_id}`
    #[must_use]
    pub fn chunk_url(&self, project_id: &str, chunk_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "chunks", chunk_id])
    }

    /// `{base}/api/projects/{project_id}/chunks/{chunk_id}/questions`
    #[must_use]
    pub fn questions_url(&self, project_id: &str, chunk_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "chunks", chunk_id, "questions"])
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, what: &str) -> Result<Response, BackendError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status, what, &body))
    }

    /// Map a non-success status to the matching error variant
    #[must_use]
    pub fn status_error(status: StatusCode, what: &str, body: &str) -> BackendError {
        let detail = if body.is_empty() {
            format!("{} ({})", what, status)
        } else {
            format!("{} ({}): {}", what, status, body)
        };

        match status {
            StatusCode::NOT_FOUND => BackendError::NotFound(detail),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Auth(detail),
            _ => BackendError::Other(detail),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        response.json::<T>().await.map_err(|e| BackendError::InvalidData(e.to_string()))
    }
}

#[async_trait]
impl ChunkBackend for HttpBackend {
    fn backend_type(&self) -> &str {
        "http"
    }

    async fn list_chunks(&self, project_id: &str) -> Result<Vec<Chunk>, BackendError> {
        let request = self.client.get(self.chunks_url(project_id));
        let response = self.send(request, "list chunks").await?;
        let list: ChunkListResponse = Self::decode(response).await?;
        Ok(list.chunks)
    }

    async fn get_chunk(&self, project_id: &str, chunk_id: &str) -> Result<Chunk, BackendError> {
        let request = self.client.get(self.chunk_url(project_id, chunk_id));
        let response = self.send(request, &format!("chunk {}", chunk_id)).await?;
        Self::decode(response).await
    }

    async fn update_chunk(&self, project_id: &str, chunk_id: &str, content: &str) -> Result<Chunk, BackendError> {
        let request = self
            .client
            .patch(self.chunk_url(project_id, chunk_id))
            .json(&UpdateChunkBody { content });
        let response = self.send(request, &format!("update chunk {}", chunk_id)).await?;
        Self::decode(response).await
    }

    async fn delete_chunk(&self, project_id: &str, chunk_id: &str) -> Result<(), BackendError> {
        let request = self.client.delete(self.chunk_url(project_id, chunk_id));
        self.send(request, &format!("delete chunk {}", chunk_id)).await?;
        Ok(())
    }

    async fn generate_questions(
        &self,
        project_id: &str,
        chunk_ids: &[String],
        model: &ModelInfo,
    ) -> Result<usize, BackendError> {
        let mut total = 0;

        for chunk_id in chunk_ids {
            let request = self
                .client
                .post(self.questions_url(project_id, chunk_id))
                .json(&GenerateQuestionsBody { model });
            let response = self
                .send(request, &format!("generate questions for chunk {}", chunk_id))
                .await?;
            let generated: GenerateQuestionsResponse = Self::decode(response).await?;
            log::info!("Generated {} questions for chunk {}", generated.questions.len(), chunk_id);
            total += generated.questions.len();
        }

        Ok(total)
    }
}
