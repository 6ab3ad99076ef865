//! Backend abstraction for the chunk service.
//!
//! The list never talks to the network itself. Everything that reads or
//! mutates chunks goes through a [`ChunkBackend`], so the UI can run against
//! the remote service or against an in-process store.

use crate::chunks::{Chunk, ModelInfo};
use async_trait::async_trait;

pub mod factory;
pub mod http;
pub mod memory;

pub use factory::create_backend;
pub use http::HttpBackend;
pub use memory::MemoryBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Request/response interface of the chunk service.
#[async_trait]
pub trait ChunkBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http", "memory").
    fn backend_type(&self) -> &str;

    async fn list_chunks(&self, project_id: &str) -> Result<Vec<Chunk>, BackendError>;

    /// Fetch one chunk including its full content
    async fn get_chunk(&self, project_id: &str, chunk_id: &str) -> Result<Chunk, BackendError>;

    async fn update_chunk(&self, project_id: &str, chunk_id: &str, content: &str) -> Result<Chunk, BackendError>;

    async fn delete_chunk(&self, project_id: &str, chunk_id: &str) -> Result<(), BackendError>;

    /// Generate questions for each chunk; returns how many were created in total
    async fn generate_questions(
        &self,
        project_id: &str,
        chunk_ids: &[String],
        model: &ModelInfo,
    ) -> Result<usize, BackendError>;
}
