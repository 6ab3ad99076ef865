use crate::backend::ChunkBackend;
use crate::chunks::{Chunk, ModelInfo, QuestionFilter};
use crate::config::Config;
use crate::constants::{ERROR_CHUNKS_LOAD_FAILED, ERROR_NO_MODEL};
use crate::logger::Logger;
use crate::ui::components::status_bar::{StatusBar, StatusInfo};
use crate::ui::components::{ChunkListComponent, DialogComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::{TaskId, TaskManager},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub project_id: String,
    /// Every chunk of the project, before filtering
    pub chunks: Vec<Chunk>,
    pub question_filter: QuestionFilter,
    pub selected_model: ModelInfo,
    pub loading: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Records the list should show under the current filter
    pub fn visible_chunks(&self) -> Vec<Chunk> {
        self.question_filter.apply(&self.chunks)
    }
}

/// Root component. Owns the records and the backend, and turns the actions
/// the list reports into backend calls.
pub struct AppComponent {
    chunk_list: ChunkListComponent,
    dialog: DialogComponent,

    state: AppState,

    backend: Arc<dyn ChunkBackend>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
    active_load_task: Option<TaskId>,
    /// A refresh arrived while a load was running; reload once it lands
    refresh_pending: bool,
}

impl AppComponent {
    pub fn new(backend: Arc<dyn ChunkBackend>, project_id: String, config: &Config, logger: Logger) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut chunk_list = ChunkListComponent::new(project_id.clone());
        chunk_list.icons.set_theme(config.ui.icon_theme);
        chunk_list.display_config = config.display.clone();
        chunk_list.preview_chars = config.ui.preview_chars;

        let mut dialog = DialogComponent::new();
        dialog.icons.set_theme(config.ui.icon_theme);
        dialog.set_logger(logger.clone());

        let state = AppState {
            project_id,
            selected_model: config.model.clone(),
            loading: true,
            ..Default::default()
        };

        let mut app = Self {
            chunk_list,
            dialog,
            state,
            backend,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
            active_load_task: None,
            refresh_pending: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn chunk_list(&self) -> &ChunkListComponent {
        &self.chunk_list
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the first load on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log(format!(
            "AppComponent: loading chunks of project {} from {} backend",
            self.state.project_id,
            self.backend.backend_type()
        ));
        self.start_chunk_load();
    }

    fn start_chunk_load(&mut self) {
        if self.active_load_task.is_some() {
            self.logger.log("Load already in progress, queueing a refresh".to_string());
            self.refresh_pending = true;
            return;
        }
        self.state.loading = true;
        let task_id = self
            .task_manager
            .spawn_chunk_load(self.backend.clone(), self.state.project_id.clone());
        self.active_load_task = Some(task_id);
        self.sync_component_data();
    }

    /// The records just loaded may predate a mutation; load again
    fn start_pending_refresh(&mut self) {
        if std::mem::take(&mut self.refresh_pending) {
            self.start_chunk_load();
        }
    }

    /// Push the current props down to the list
    fn sync_component_data(&mut self) {
        self.chunk_list.update_data(
            self.state.visible_chunks(),
            self.state.loading,
            self.state.question_filter,
            self.state.selected_model.clone(),
        );
    }

    fn show_error(&mut self, message: String) {
        self.logger.log(format!("Error: {}", message));
        self.dialog.update(Action::ShowDialog(DialogType::Error(message)));
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('L') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require the backend or app state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            Action::RefreshChunks => {
                self.start_chunk_load();
                Action::None
            }
            Action::ChunksLoaded(chunks) => {
                self.logger.log(format!("Loaded {} chunks", chunks.len()));
                self.active_load_task = None;
                self.state.loading = false;
                self.state.chunks = chunks;
                self.sync_component_data();
                self.start_pending_refresh();
                Action::None
            }
            Action::ChunksLoadFailed(error) => {
                self.active_load_task = None;
                self.state.loading = false;
                self.sync_component_data();
                self.show_error(format!("{}: {}", ERROR_CHUNKS_LOAD_FAILED, error));
                self.start_pending_refresh();
                Action::None
            }
            Action::FetchChunk { token, chunk_id } => {
                self.logger.log(format!("Fetching chunk {} (request {})", chunk_id, token));
                self.task_manager.spawn_chunk_fetch(
                    self.backend.clone(),
                    self.state.project_id.clone(),
                    chunk_id,
                    token,
                );
                Action::None
            }
            Action::DeleteChunk(chunk_id) => {
                self.logger.log(format!("Deleting chunk {}", chunk_id));
                self.task_manager
                    .spawn_delete(self.backend.clone(), self.state.project_id.clone(), chunk_id);
                Action::None
            }
            Action::EditChunk { id, content } => {
                self.logger.log(format!("Updating chunk {} ({} chars)", id, content.chars().count()));
                self.task_manager
                    .spawn_update(self.backend.clone(), self.state.project_id.clone(), id, content);
                Action::None
            }
            Action::GenerateQuestions(chunk_ids) => {
                if !self.state.selected_model.is_configured() {
                    self.show_error(ERROR_NO_MODEL.to_string());
                    return Action::None;
                }
                self.logger.log(format!(
                    "Generating questions for {} chunks with {}",
                    chunk_ids.len(),
                    self.state.selected_model.display_name()
                ));
                self.task_manager.spawn_generation(
                    self.backend.clone(),
                    self.state.project_id.clone(),
                    chunk_ids,
                    self.state.selected_model.clone(),
                );
                Action::None
            }
            Action::SetQuestionFilter(filter) => {
                self.logger.log(format!("Question filter: {}", filter.label()));
                self.state.question_filter = filter;
                self.sync_component_data();
                Action::None
            }
            Action::OperationCompleted(message) => {
                self.logger.log(message.clone());
                self.state.status_message = Some(message);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            if let Action::ShowDialog(DialogType::Error(message)) = &action {
                self.logger.log(format!("Background: {}", message));
            }
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (task_id, description) in completed_tasks {
            self.logger.log(format!("Background: task {} finished ({})", task_id, description));
        }

        actions
    }

    /// Route an action through the component hierarchy, then the app
    pub fn dispatch(&mut self, action: Action) -> Action {
        let action = self.update(action);
        self.handle_app_action(action)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> Action {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    self.dialog.handle_key_events(key)
                } else if self.chunk_list.has_open_dialog() {
                    self.chunk_list.handle_key_events(key)
                } else {
                    match self.chunk_list.handle_key_events(key) {
                        Action::None => self.handle_global_key(key),
                        action => action,
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action)
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.chunk_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (main_area, status_area) = LayoutManager::main_layout(rect);

        self.chunk_list.render(f, main_area);

        StatusBar::render(
            f,
            status_area,
            StatusInfo {
                loading: self.state.loading,
                active_tasks: self.task_manager.task_count(),
                message: self.state.status_message.as_deref(),
            },
        );

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
