use crate::chunk;
use chunklist::backend::{ChunkBackend, MemoryBackend};
use chunklist::ui::core::{Action, DialogType, TaskManager};
use chunklist::ModelInfo;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{timeout, Duration};

fn backend() -> Arc<dyn ChunkBackend> {
    Arc::new(MemoryBackend::new(vec![
        chunk("c1", "f1", "doc-part-1"),
        chunk("c2", "f1", "doc-part-2"),
    ]))
}

async fn next(rx: &mut UnboundedReceiver<Action>) -> Action {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for action")
        .expect("channel closed")
}

#[tokio::test]
async fn test_load_sends_chunks() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_chunk_load(backend(), "p1".to_string());

    match next(&mut rx).await {
        Action::ChunksLoaded(chunks) => assert_eq!(chunks.len(), 2),
        other => panic!("expected ChunksLoaded, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_echoes_token() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_chunk_fetch(backend(), "p1".to_string(), "c2".to_string(), 7);

    match next(&mut rx).await {
        Action::ChunkFetched { token, result } => {
            assert_eq!(token, 7);
            assert_eq!(result.map(|c| c.id), Ok("c2".to_string()));
        }
        other => panic!("expected ChunkFetched, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_failure_is_reported_with_token() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_chunk_fetch(backend(), "p1".to_string(), "missing".to_string(), 2);

    match next(&mut rx).await {
        Action::ChunkFetched { token, result } => {
            assert_eq!(token, 2);
            assert!(result.is_err());
        }
        other => panic!("expected ChunkFetched, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_completes_then_refreshes() {
    let backend = backend();
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_delete(backend.clone(), "p1".to_string(), "c1".to_string());

    assert!(matches!(next(&mut rx).await, Action::OperationCompleted(msg) if msg.contains("c1")));
    assert!(matches!(next(&mut rx).await, Action::RefreshChunks));
    assert_eq!(backend.list_chunks("p1").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_operation_shows_error() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_update(backend(), "p1".to_string(), "missing".to_string(), "text".to_string());

    match next(&mut rx).await {
        Action::ShowDialog(DialogType::Error(message)) => assert!(message.contains("Failed to update chunk")),
        other => panic!("expected error dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generation_reports_count() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_generation(
        backend(),
        "p1".to_string(),
        vec!["c1".to_string(), "c2".to_string()],
        ModelInfo::new("openai", "gpt-4o-mini"),
    );

    match next(&mut rx).await {
        Action::OperationCompleted(message) => assert!(message.contains("6 questions from 2 chunks")),
        other => panic!("expected OperationCompleted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_chunk_load(backend(), "p1".to_string());
    assert_eq!(manager.task_count(), 1);

    next(&mut rx).await;
    // The send happens just before the task returns
    for _ in 0..50 {
        if !manager.cleanup_finished_tasks().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(manager.task_count(), 0);
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let (mut manager, _rx) = TaskManager::new();
    manager.spawn_chunk_load(backend(), "p1".to_string());
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
