//! In-process chunk store, used for demo mode and tests.

use super::{BackendError, ChunkBackend};
use crate::chunks::{Chunk, ModelInfo};
use crate::constants::MEMORY_QUESTIONS_PER_CHUNK;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Chunk store kept in memory. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    chunks: Arc<Mutex<Vec<Chunk>>>,
}

impl MemoryBackend {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks: Arc::new(Mutex::new(chunks)),
        }
    }

    /// A small project with two files split into several parts
    pub fn with_demo_data(project_id: &str) -> Self {
        let mut chunks = Vec::new();
        let files = [("file-a", "handbook.md", 7), ("file-b", "faq.md", 4)];

        for (file_id, file_name, parts) in files {
            for part in 1..=parts {
                let content = format!(
                    "{} section {}.\n\nThis is the text of part {} of {}, kept short for the demo.",
                    file_name, part, part, file_name
                );
                chunks.push(Chunk {
                    id: format!("{}-{}", file_id, part),
                    project_id: project_id.to_string(),
                    file_id: file_id.to_string(),
                    file_name: file_name.to_string(),
                    name: format!("{}-part-{}", file_name.trim_end_matches(".md"), part),
                    size: content.chars().count(),
                    content,
                    question_count: if part % 3 == 0 { 2 } else { 0 },
                });
            }
        }

        Self::new(chunks)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Chunk>>, BackendError> {
        self.chunks
            .lock()
            .map_err(|_| BackendError::Other("chunk store lock poisoned".to_string()))
    }

    fn not_found(chunk_id: &str) -> BackendError {
        BackendError::NotFound(format!("chunk {}", chunk_id))
    }
}

#[async_trait]
impl ChunkBackend for MemoryBackend {
    fn backend_type(&self) -> &str {
        "memory"
    }

    async fn list_chunks(&self, project_id: &str) -> Result<Vec<Chunk>, BackendError> {
        let chunks = self.lock()?;
        Ok(chunks.iter().filter(|chunk| chunk.project_id == project_id).cloned().collect())
    }

    async fn get_chunk(&self, project_id: &str, chunk_id: &str) -> Result<Chunk, BackendError> {
        let chunks = self.lock()?;
        chunks
            .iter()
            .find(|chunk| chunk.project_id == project_id && chunk.id == chunk_id)
            .cloned()
            .ok_or_else(|| Self::not_found(chunk_id))
    }

    async fn update_chunk(&self, project_id: &str, chunk_id: &str, content: &str) -> Result<Chunk, BackendError> {
        let mut chunks = self.lock()?;
        let chunk = chunks
            .iter_mut()
            .find(|chunk| chunk.project_id == project_id && chunk.id == chunk_id)
            .ok_or_else(|| Self::not_found(chunk_id))?;

        chunk.content = content.to_string();
        chunk.size = content.chars().count();
        Ok(chunk.clone())
    }

    async fn delete_chunk(&self, project_id: &str, chunk_id: &str) -> Result<(), BackendError> {
        let mut chunks = self.lock()?;
        let before = chunks.len();
        chunks.retain(|chunk| !(chunk.project_id == project_id && chunk.id == chunk_id));

        if chunks.len() == before {
            return Err(Self::not_found(chunk_id));
        }
        Ok(())
    }

    async fn generate_questions(
        &self,
        project_id: &str,
        chunk_ids: &[String],
        model: &ModelInfo,
    ) -> Result<usize, BackendError> {
        if !model.is_configured() {
            return Err(BackendError::InvalidData("no model selected".to_string()));
        }

        let mut chunks = self.lock()?;

        // All ids must exist before any chunk is touched
        if let Some(missing) = chunk_ids
            .iter()
            .find(|id| !chunks.iter().any(|chunk| chunk.project_id == project_id && &chunk.id == *id))
        {
            return Err(Self::not_found(missing));
        }

        let mut total = 0;
        for chunk in chunks
            .iter_mut()
            .filter(|chunk| chunk.project_id == project_id && chunk_ids.contains(&chunk.id))
        {
            chunk.question_count += MEMORY_QUESTIONS_PER_CHUNK;
            total += MEMORY_QUESTIONS_PER_CHUNK;
        }

        Ok(total)
    }
}
