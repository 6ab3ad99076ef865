use crate::chunks::{sort_chunks, Chunk, ModelInfo, Pagination, QuestionFilter, Selection};
use crate::config::DisplayConfig;
use crate::constants::{PREVIEW_DEFAULT_CHARS, TEXT_FETCHING_CHUNK, TEXT_LOADING_CHUNKS, TEXT_NO_CHUNKS};
use crate::icons::IconService;
use crate::ui::components::chunk_card_component::ChunkCard;
use crate::ui::components::chunk_list_header::{ChunkListHeader, HEADER_HEIGHT};
use crate::ui::components::dialogs::{
    render_chunk_view_dialog, render_delete_confirmation_dialog, scroll_behavior, ChunkViewContent,
};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{
    actions::{Action, DialogType, RequestToken},
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, ScrollbarState},
    Frame,
};

/// Detail dialog state. The last fetched chunk outlives the open flag.
#[derive(Debug, Clone, Default)]
pub struct ViewDialogState {
    pub open: bool,
    pub chunk: Option<Chunk>,
    pub error: Option<String>,
    /// Token of the newest fetch still in flight
    pub pending: Option<RequestToken>,
    next_token: RequestToken,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl ViewDialogState {
    fn allocate_token(&mut self) -> RequestToken {
        self.next_token += 1;
        self.pending = Some(self.next_token);
        self.next_token
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteDialogState {
    pub open: bool,
    pub chunk_id: Option<String>,
}

/// Paginated, selectable list of text chunks with its view and delete dialogs.
///
/// The parent owns the records and the filter; this component owns paging,
/// selection, keyboard focus and dialog state, and reports mutations upward
/// as actions.
pub struct ChunkListComponent {
    pub project_id: String,
    chunks: Vec<Chunk>,
    pub loading: bool,
    pub question_filter: QuestionFilter,
    pub selected_model: ModelInfo,

    pub pagination: Pagination,
    pub selection: Selection,
    /// Focused card, as an index into the current page
    pub focused: usize,
    list_state: ListState,
    scrollbar: ScrollbarHelper,

    pub view_dialog: ViewDialogState,
    pub delete_dialog: DeleteDialogState,

    pub icons: IconService,
    pub display_config: DisplayConfig,
    pub preview_chars: usize,
}

impl Default for ChunkListComponent {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl ChunkListComponent {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            chunks: Vec::new(),
            loading: true,
            question_filter: QuestionFilter::default(),
            selected_model: ModelInfo::default(),
            pagination: Pagination::default(),
            selection: Selection::new(),
            focused: 0,
            list_state: ListState::default(),
            scrollbar: ScrollbarHelper::new(),
            view_dialog: ViewDialogState::default(),
            delete_dialog: DeleteDialogState::default(),
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
            preview_chars: PREVIEW_DEFAULT_CHARS,
        }
    }

    /// Replace the inbound props. Records are sorted here; the current page
    /// and the selection are left alone.
    pub fn update_data(
        &mut self,
        mut chunks: Vec<Chunk>,
        loading: bool,
        question_filter: QuestionFilter,
        selected_model: ModelInfo,
    ) {
        sort_chunks(&mut chunks);
        self.chunks = chunks;
        self.loading = loading;
        self.question_filter = question_filter;
        self.selected_model = selected_model;
        self.clamp_focus();
    }

    /// All records in display order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Records on the current page
    pub fn displayed_chunks(&self) -> &[Chunk] {
        self.pagination.slice(&self.chunks)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.chunks.len())
    }

    pub fn focused_chunk(&self) -> Option<&Chunk> {
        self.displayed_chunks().get(self.focused)
    }

    pub fn has_open_dialog(&self) -> bool {
        self.view_dialog.open || self.delete_dialog.open
    }

    fn clamp_focus(&mut self) {
        let len = self.displayed_chunks().len();
        self.focused = self.focused.min(len.saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        let len = self.displayed_chunks().len();
        if len > 0 {
            self.focused = (self.focused + 1).min(len - 1);
        }
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn next_page(&mut self) {
        self.pagination.next_page(self.chunks.len());
        self.focused = 0;
    }

    pub fn prev_page(&mut self) {
        self.pagination.prev_page(self.chunks.len());
        self.focused = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
        self.focused = 0;
    }

    pub fn toggle_selection(&mut self, chunk_id: &str) {
        self.selection.toggle(chunk_id);
    }

    pub fn toggle_select_all(&mut self) {
        self.selection.toggle_all(self.chunks.iter().map(|chunk| chunk.id.as_str()));
    }

    /// Start a detail fetch; the dialog opens once the matching response arrives
    pub fn request_view(&mut self, chunk_id: &str) -> Action {
        let token = self.view_dialog.allocate_token();
        log::debug!("view requested for chunk {} (token {})", chunk_id, token);
        Action::FetchChunk {
            token,
            chunk_id: chunk_id.to_string(),
        }
    }

    /// Apply a fetch response. Returns false when it was stale and dropped.
    pub fn apply_fetch_result(&mut self, token: RequestToken, result: Result<Chunk, String>) -> bool {
        if self.view_dialog.pending != Some(token) {
            log::debug!("dropping stale chunk response (token {})", token);
            return false;
        }

        self.view_dialog.pending = None;
        match result {
            Ok(chunk) => {
                self.view_dialog.chunk = Some(chunk);
                self.view_dialog.error = None;
            }
            Err(message) => {
                self.view_dialog.error = Some(message);
            }
        }
        self.view_dialog.open = true;
        scroll_behavior::scroll_to_top(&mut self.view_dialog.scroll_offset, &mut self.view_dialog.scrollbar_state);
        true
    }

    pub fn close_view(&mut self) {
        self.view_dialog.open = false;
    }

    pub fn open_delete(&mut self, chunk_id: &str) {
        self.delete_dialog = DeleteDialogState {
            open: true,
            chunk_id: Some(chunk_id.to_string()),
        };
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog = DeleteDialogState::default();
    }

    /// Emit the delete for the staged id, if any, then close the dialog
    pub fn confirm_delete(&mut self) -> Action {
        let staged = self.delete_dialog.chunk_id.take();
        self.delete_dialog = DeleteDialogState::default();
        match staged {
            Some(chunk_id) => Action::DeleteChunk(chunk_id),
            None => Action::None,
        }
    }

    pub fn batch_generate(&self) -> Action {
        if self.selection.is_empty() {
            return Action::None;
        }
        Action::GenerateQuestions(self.selection.ids().to_vec())
    }

    pub fn generate_single(&self, chunk_id: &str) -> Action {
        Action::GenerateQuestions(vec![chunk_id.to_string()])
    }

    pub fn edit(&self, chunk: &Chunk) -> Action {
        Action::ShowDialog(DialogType::ChunkEdit {
            chunk_id: chunk.id.clone(),
            content: chunk.content.clone(),
        })
    }

    pub fn cycle_filter(&self) -> Action {
        Action::SetQuestionFilter(self.question_filter.next())
    }

    fn handle_view_dialog_key(&mut self, key: KeyEvent) -> Action {
        let ViewDialogState {
            open,
            scroll_offset,
            scrollbar_state,
            ..
        } = &mut self.view_dialog;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => *open = false,
            KeyCode::Up | KeyCode::Char('k') => scroll_behavior::scroll_up(scroll_offset, scrollbar_state),
            KeyCode::Down | KeyCode::Char('j') => scroll_behavior::scroll_down(scroll_offset, scrollbar_state),
            KeyCode::PageUp => scroll_behavior::page_up(scroll_offset, scrollbar_state),
            KeyCode::PageDown => scroll_behavior::page_down(scroll_offset, scrollbar_state),
            KeyCode::Home => scroll_behavior::scroll_to_top(scroll_offset, scrollbar_state),
            KeyCode::End => scroll_behavior::scroll_to_bottom(scroll_offset, scrollbar_state),
            _ => {}
        }
        Action::None
    }

    fn handle_delete_dialog_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.confirm_delete(),
            KeyCode::Esc | KeyCode::Char('n') => {
                self.cancel_delete();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_pager(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let pager = Paragraph::new(Line::from(vec![
            Span::styled("◀ h ", key_style),
            Span::styled(
                format!(" Page {} of {} ", self.pagination.page(), self.total_pages()),
                Style::default().fg(Color::White),
            ),
            Span::styled(" l ▶", key_style),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(pager, area);
    }

    fn render_message(&self, f: &mut Frame, rect: Rect, message: String, color: Color) {
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL).title(" Chunks "));
        f.render_widget(paragraph, rect);
    }

    fn render_list(&mut self, f: &mut Frame, rect: Rect) {
        let show_pager = self.total_pages() > 1;
        let (header_area, list_area, pager_area) = LayoutManager::chunk_list_layout(rect, HEADER_HEIGHT, show_pager);

        ChunkListHeader {
            project_id: &self.project_id,
            total_chunks: self.chunks.len(),
            selected_count: self.selection.len(),
            question_filter: self.question_filter,
            selected_model: &self.selected_model,
            icons: &self.icons,
        }
        .render(f, header_area);

        if self.chunks.is_empty() {
            self.render_message(f, list_area, TEXT_NO_CHUNKS.to_string(), Color::Gray);
            return;
        }

        let items: Vec<ListItem> = self
            .displayed_chunks()
            .iter()
            .enumerate()
            .map(|(index, chunk)| {
                ChunkCard::new(
                    chunk,
                    self.selection.contains(&chunk.id),
                    &self.icons,
                    &self.display_config,
                    self.preview_chars,
                )
                .render(index == self.focused)
            })
            .collect();

        let title = if self.view_dialog.pending.is_some() {
            format!(" Chunks · {} {} ", self.icons.loading(), TEXT_FETCHING_CHUNK)
        } else {
            " Chunks ".to_string()
        };

        self.list_state.select((!items.is_empty()).then_some(self.focused));
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(Color::DarkGray));
        f.render_stateful_widget(list, list_area, &mut self.list_state);

        let page_size = self.pagination.page_size();
        if ScrollbarHelper::needs_scrollbar(self.chunks.len(), page_size) {
            let (start, _) = self.pagination.bounds();
            self.scrollbar.update_state(self.chunks.len(), start + self.focused, page_size);
            self.scrollbar.render(f, ScrollbarHelper::scrollbar_area(list_area));
        }

        if let Some(pager_area) = pager_area {
            self.render_pager(f, pager_area);
        }
    }

    /// Dialogs draw over whatever state the list is in
    fn render_dialogs(&mut self, f: &mut Frame, rect: Rect) {
        if self.view_dialog.open {
            let content = match (&self.view_dialog.error, &self.view_dialog.chunk) {
                (Some(error), _) => Some(ChunkViewContent::Failed(error)),
                (None, Some(chunk)) => Some(ChunkViewContent::Loaded(chunk)),
                (None, None) => None,
            };
            if let Some(content) = content {
                render_chunk_view_dialog(
                    f,
                    rect,
                    &self.icons,
                    content,
                    self.view_dialog.scroll_offset,
                    &mut self.view_dialog.scrollbar_state,
                );
            }
        }

        if self.delete_dialog.open {
            let staged = self.delete_dialog.chunk_id.as_deref().unwrap_or_default();
            let name = self
                .chunks
                .iter()
                .find(|chunk| chunk.id == staged)
                .map_or(staged, |chunk| chunk.name.as_str());
            render_delete_confirmation_dialog(f, rect, &self.icons, name);
        }
    }
}

impl Component for ChunkListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.delete_dialog.open {
            return self.handle_delete_dialog_key(key);
        }
        if self.view_dialog.open {
            return self.handle_view_dialog_key(key);
        }
        if self.loading {
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.focus_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.focus_previous();
                Action::None
            }
            KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') | KeyCode::Char('n') => {
                self.next_page();
                Action::None
            }
            KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') | KeyCode::Char('p') => {
                self.prev_page();
                Action::None
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.focused_chunk().map(|chunk| chunk.id.clone()) {
                    self.toggle_selection(&id);
                }
                Action::None
            }
            KeyCode::Char('a') => {
                self.toggle_select_all();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('v') => match self.focused_chunk().map(|chunk| chunk.id.clone()) {
                Some(id) => self.request_view(&id),
                None => Action::None,
            },
            KeyCode::Char('e') => self.focused_chunk().map_or(Action::None, |chunk| self.edit(chunk)),
            KeyCode::Char('d') => {
                if let Some(id) = self.focused_chunk().map(|chunk| chunk.id.clone()) {
                    self.open_delete(&id);
                }
                Action::None
            }
            KeyCode::Char('g') => self
                .focused_chunk()
                .map_or(Action::None, |chunk| self.generate_single(&chunk.id)),
            KeyCode::Char('B') => self.batch_generate(),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('r') => Action::RefreshChunks,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ChunkFetched { token, result } => {
                self.apply_fetch_result(token, result);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.loading {
            self.render_message(f, rect, format!("{} {}", self.icons.loading(), TEXT_LOADING_CHUNKS), Color::Yellow);
        } else {
            self.render_list(f, rect);
        }
        self.render_dialogs(f, rect);
    }
}
