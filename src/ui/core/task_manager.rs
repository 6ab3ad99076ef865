use super::actions::{Action, DialogType, RequestToken};
use crate::backend::ChunkBackend;
use crate::chunks::ModelInfo;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    ChunksLoaded(usize),
    ChunkFetched(RequestToken),
    OperationCompleted(String),
    Failed(String),
}

/// Runs backend calls on the tokio runtime and reports back through actions.
///
/// Every spawned task ends by sending exactly one result action (plus a
/// refresh for mutations) on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<Fut>(&mut self, description: String, future: Fut) -> TaskId
    where
        Fut: Future<Output = TaskResult> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let handle = tokio::spawn(future);
        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Load every chunk of a project
    pub fn spawn_chunk_load(&mut self, backend: Arc<dyn ChunkBackend>, project_id: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Loading chunks of project {}", project_id);

        self.spawn(description, async move {
            match backend.list_chunks(&project_id).await {
                Ok(chunks) => {
                    let count = chunks.len();
                    let _ = action_sender.send(Action::ChunksLoaded(chunks));
                    TaskResult::ChunksLoaded(count)
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    let _ = action_sender.send(Action::ChunksLoadFailed(error_msg.clone()));
                    TaskResult::Failed(error_msg)
                }
            }
        })
    }

    /// Fetch one chunk for the view dialog, tagged with the request token
    pub fn spawn_chunk_fetch(
        &mut self,
        backend: Arc<dyn ChunkBackend>,
        project_id: String,
        chunk_id: String,
        token: RequestToken,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Fetching chunk {} (request {})", chunk_id, token);

        self.spawn(description, async move {
            let result = backend
                .get_chunk(&project_id, &chunk_id)
                .await
                .map_err(|e| format!("{}: {}", crate::constants::ERROR_CHUNK_FETCH_FAILED, e));
            let _ = action_sender.send(Action::ChunkFetched { token, result });
            TaskResult::ChunkFetched(token)
        })
    }

    /// Run a mutation; on success refresh the list, on failure show an error dialog
    pub fn spawn_operation<F, Fut>(&mut self, operation: F, description: String) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();

        self.spawn(description, async move {
            match operation().await {
                Ok(message) => {
                    let _ = action_sender.send(Action::OperationCompleted(message.clone()));
                    let _ = action_sender.send(Action::RefreshChunks);
                    TaskResult::OperationCompleted(message)
                }
                Err(e) => {
                    let error_msg = format!("{:#}", e);
                    let _ = action_sender.send(Action::ShowDialog(DialogType::Error(error_msg.clone())));
                    TaskResult::Failed(error_msg)
                }
            }
        })
    }

    /// Delete one chunk
    pub fn spawn_delete(&mut self, backend: Arc<dyn ChunkBackend>, project_id: String, chunk_id: String) -> TaskId {
        let description = format!("Delete chunk {}", chunk_id);
        self.spawn_operation(
            move || async move {
                backend
                    .delete_chunk(&project_id, &chunk_id)
                    .await
                    .map(|()| format!("{}: {}", crate::constants::SUCCESS_CHUNK_DELETED, chunk_id))
                    .map_err(|e| anyhow::anyhow!("{}: {}", crate::constants::ERROR_CHUNK_DELETE_FAILED, e))
            },
            description,
        )
    }

    /// Replace the content of one chunk
    pub fn spawn_update(
        &mut self,
        backend: Arc<dyn ChunkBackend>,
        project_id: String,
        chunk_id: String,
        content: String,
    ) -> TaskId {
        let description = format!("Edit chunk {}", chunk_id);
        self.spawn_operation(
            move || async move {
                backend
                    .update_chunk(&project_id, &chunk_id, &content)
                    .await
                    .map(|chunk| format!("{}: {}", crate::constants::SUCCESS_CHUNK_UPDATED, chunk.name))
                    .map_err(|e| anyhow::anyhow!("{}: {}", crate::constants::ERROR_CHUNK_UPDATE_FAILED, e))
            },
            description,
        )
    }

    /// Generate questions for a batch of chunks
    pub fn spawn_generation(
        &mut self,
        backend: Arc<dyn ChunkBackend>,
        project_id: String,
        chunk_ids: Vec<String>,
        model: ModelInfo,
    ) -> TaskId {
        let description = format!("Generate questions for {} chunks", chunk_ids.len());
        self.spawn_operation(
            move || async move {
                backend
                    .generate_questions(&project_id, &chunk_ids, &model)
                    .await
                    .map(|count| {
                        format!(
                            "{}: {} questions from {} chunks",
                            crate::constants::SUCCESS_QUESTIONS_GENERATED,
                            count,
                            chunk_ids.len()
                        )
                    })
                    .map_err(|e| anyhow::anyhow!("{}: {}", crate::constants::ERROR_QUESTIONS_FAILED, e))
            },
            description,
        )
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id).map(|task| (task_id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
