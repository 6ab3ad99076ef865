use crate::{buffer_text, char_key, chunk, chunks, key};
use chunklist::backend::{ChunkBackend, MemoryBackend};
use chunklist::config::Config;
use chunklist::constants::ERROR_NO_MODEL;
use chunklist::logger::Logger;
use chunklist::ui::app_component::{AppComponent, AppState};
use chunklist::ui::core::{Action, Component, DialogType, EventType};
use chunklist::{ModelInfo, QuestionFilter};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use tokio::time::{sleep, Duration};

fn config_with_model(model: ModelInfo) -> Config {
    Config {
        model,
        ..Config::default()
    }
}

fn app(backend: Arc<dyn ChunkBackend>, config: &Config) -> AppComponent {
    AppComponent::new(backend, "p1".to_string(), config, Logger::new())
}

fn memory(count: usize) -> Arc<dyn ChunkBackend> {
    Arc::new(MemoryBackend::new(chunks(count)))
}

/// Pump background results into the app until `done` holds
async fn pump_until(app: &mut AppComponent, done: impl Fn(&AppComponent) -> bool) {
    for _ in 0..200 {
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if done(app) {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}

fn press(app: &mut AppComponent, event: KeyEvent) -> Action {
    app.handle_event(EventType::Key(event))
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(!state.loading, "Default AppState should not be loading");
    assert!(state.status_message.is_none());
    assert!(state.visible_chunks().is_empty());
}

#[test]
fn test_visible_chunks_follow_filter() {
    let mut with_questions = chunk("c2", "f1", "doc-part-2");
    with_questions.question_count = 3;
    let state = AppState {
        chunks: vec![chunk("c1", "f1", "doc-part-1"), with_questions],
        question_filter: QuestionFilter::Generated,
        ..AppState::default()
    };

    let visible = state.visible_chunks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "c2");
}

#[tokio::test]
async fn test_initial_load_fills_list() {
    let mut app = app(memory(7), &Config::default());
    assert!(app.chunk_list().loading);

    app.trigger_initial_load();
    pump_until(&mut app, |app| !app.state().loading).await;

    assert_eq!(app.chunk_list().chunks().len(), 7);
    assert!(!app.chunk_list().loading);
    assert_eq!(app.chunk_list().total_pages(), 2);
}

#[tokio::test]
async fn test_load_failure_shows_error_dialog() {
    let mut app = app(memory(1), &Config::default());
    app.dispatch(Action::ChunksLoadFailed("service down".to_string()));

    assert!(!app.state().loading);
    assert!(matches!(
        &app.dialog().dialog_type,
        Some(DialogType::Error(message)) if message.contains("service down")
    ));
}

#[tokio::test]
async fn test_generate_without_model_is_refused() {
    let backend = memory(2);
    let mut app = app(backend.clone(), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(2)));

    app.dispatch(Action::GenerateQuestions(vec!["c1".to_string()]));

    assert!(matches!(
        &app.dialog().dialog_type,
        Some(DialogType::Error(message)) if message == ERROR_NO_MODEL
    ));
    assert_eq!(app.active_task_count(), 0);
    let stored = backend.get_chunk("p1", "c1").await.unwrap();
    assert_eq!(stored.question_count, 0);
}

#[tokio::test]
async fn test_batch_generation_updates_counts() {
    let backend = memory(3);
    let mut app = app(backend.clone(), &config_with_model(ModelInfo::new("openai", "gpt-4o-mini")));
    app.dispatch(Action::ChunksLoaded(chunks(3)));

    press(&mut app, char_key(' '));
    press(&mut app, key(KeyCode::Down));
    press(&mut app, char_key(' '));
    press(&mut app, char_key('B'));

    pump_until(&mut app, |app| {
        app.state().chunks.iter().filter(|c| c.has_questions()).count() == 2
    })
    .await;

    let status = app.state().status_message.clone().unwrap_or_default();
    assert!(status.contains("6 questions from 2 chunks"));
    assert_eq!(backend.get_chunk("p1", "c3").await.unwrap().question_count, 0);
}

#[tokio::test]
async fn test_filter_cycles_through_app() {
    let mut loaded = chunks(3);
    loaded[1].question_count = 2;
    let mut app = app(memory(3), &Config::default());
    app.dispatch(Action::ChunksLoaded(loaded));

    press(&mut app, char_key('f'));
    assert_eq!(app.state().question_filter, QuestionFilter::Generated);
    assert_eq!(app.chunk_list().chunks().len(), 1);

    press(&mut app, char_key('f'));
    assert_eq!(app.chunk_list().chunks().len(), 2);
}

#[tokio::test]
async fn test_view_flow_opens_dialog() {
    let mut app = app(memory(3), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(3)));

    press(&mut app, key(KeyCode::Enter));
    pump_until(&mut app, |app| app.chunk_list().view_dialog.open).await;

    assert_eq!(
        app.chunk_list().view_dialog.chunk.as_ref().map(|c| c.id.as_str()),
        Some("c1")
    );

    // Closing the view does not quit
    press(&mut app, char_key('q'));
    assert!(!app.chunk_list().view_dialog.open);
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_delete_flow_removes_chunk() {
    let mut app = app(memory(3), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(3)));

    press(&mut app, char_key('d'));
    assert!(app.chunk_list().delete_dialog.open);
    press(&mut app, key(KeyCode::Enter));

    pump_until(&mut app, |app| app.state().chunks.len() == 2 && !app.state().loading).await;
    assert!(app.state().chunks.iter().all(|c| c.id != "c1"));
}

#[tokio::test]
async fn test_edit_flow_updates_content() {
    let backend = memory(1);
    let mut app = app(backend.clone(), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(1)));

    press(&mut app, char_key('e'));
    assert!(app.dialog().is_visible());
    press(&mut app, char_key('!'));
    press(&mut app, key(KeyCode::Enter));

    pump_until(&mut app, |app| {
        app.state().chunks.first().is_some_and(|c| c.content.ends_with('!'))
    })
    .await;
    assert_eq!(backend.get_chunk("p1", "c1").await.unwrap().content, "Content of doc-part-1!");
}

#[tokio::test]
async fn test_global_keys() {
    let mut app = app(memory(1), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(1)));

    press(&mut app, char_key('?'));
    assert!(matches!(app.dialog().dialog_type, Some(DialogType::Help)));
    press(&mut app, key(KeyCode::Esc));
    assert!(!app.dialog().is_visible());

    let action = press(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(matches!(action, Action::Quit));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_render_shows_list_and_status() {
    let mut app = app(memory(2), &Config::default());
    app.dispatch(Action::ChunksLoaded(chunks(2)));

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let screen = buffer_text(terminal.backend().buffer());

    assert!(screen.contains("doc-part-2"));
    assert!(screen.contains("q: quit"));
}

#[tokio::test]
async fn test_refresh_during_load_reloads_afterwards() {
    let backend = memory(3);
    let mut app = app(backend.clone(), &Config::default());

    app.trigger_initial_load();
    // Let the load read all three chunks before the store changes
    sleep(Duration::from_millis(20)).await;
    backend.delete_chunk("p1", "c2").await.unwrap();
    app.dispatch(Action::RefreshChunks);

    pump_until(&mut app, |app| !app.state().loading && app.state().chunks.len() == 2).await;

    let ids: Vec<&str> = app.chunk_list().chunks().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c3"]);
}

#[tokio::test]
async fn test_refresh_queued_after_failed_load() {
    let mut app = app(memory(2), &Config::default());
    app.trigger_initial_load();
    app.dispatch(Action::RefreshChunks);

    // A failed load still starts the queued refresh
    app.dispatch(Action::ChunksLoadFailed("timeout".to_string()));
    assert!(app.state().loading);

    pump_until(&mut app, |app| !app.state().loading).await;
    assert_eq!(app.state().chunks.len(), 2);
}
