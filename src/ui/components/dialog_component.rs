//! Modal dialogs owned by the application: chunk editing, error messages,
//! help and logs.
//!
//! The view and delete dialogs of the chunk list live with the list itself,
//! since their state is part of the list's own state machine.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    /// Cursor position in characters, not bytes
    pub cursor_position: usize,
    pub icons: IconService,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            cursor_position: 0,
            icons: IconService::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn handle_submit(&mut self) -> Action {
        let Some(DialogType::ChunkEdit { chunk_id, .. }) = &self.dialog_type else {
            return Action::None;
        };
        if self.input_buffer.trim().is_empty() {
            return Action::None;
        }

        let action = Action::EditChunk {
            id: chunk_id.clone(),
            content: self.input_buffer.clone(),
        };
        self.clear_dialog();
        action
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn cursor_byte_pos(&self) -> usize {
        self.input_buffer
            .chars()
            .take(self.cursor_position)
            .map(char::len_utf8)
            .sum()
    }

    /// Shared scrolling keys. Returns false when the key is not a scroll key.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let offset = &mut self.scroll_offset;
        let state = &mut self.scrollbar_state;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scroll_behavior::scroll_up(offset, state),
            KeyCode::Down | KeyCode::Char('j') => scroll_behavior::scroll_down(offset, state),
            KeyCode::PageUp => scroll_behavior::page_up(offset, state),
            KeyCode::PageDown => scroll_behavior::page_down(offset, state),
            KeyCode::Home => scroll_behavior::scroll_to_top(offset, state),
            KeyCode::End => scroll_behavior::scroll_to_bottom(offset, state),
            _ => return false,
        }
        true
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.cursor_byte_pos();
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            // Line breaks
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.insert_char('\n');
                Action::None
            }
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char('\n');
                Action::None
            }
            KeyCode::Enter => self.handle_submit(),
            KeyCode::Char(c) => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                    let byte_pos = self.cursor_byte_pos();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    let byte_pos = self.cursor_byte_pos();
                    self.input_buffer.remove(byte_pos);
                }
                Action::None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input_buffer.chars().count() {
                    self.cursor_position += 1;
                }
                Action::None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                Action::None
            }
            KeyCode::End => {
                self.cursor_position = self.input_buffer.chars().count();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::ChunkEdit { .. }) => self.handle_input_key(key),
            Some(DialogType::Error(_)) => {
                if self.handle_scroll_key(key) {
                    Action::None
                } else {
                    Action::HideDialog
                }
            }
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('L') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.clear_dialog();
                if let DialogType::ChunkEdit { content, .. } = &dialog_type {
                    self.input_buffer = content.clone();
                    self.cursor_position = content.chars().count();
                }
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::ChunkEdit { .. } => {
                system_dialogs::render_chunk_edit_dialog(f, rect, &self.icons, &self.input_buffer, self.cursor_position);
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(
                    f,
                    rect,
                    &self.icons,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                let logger = self.logger.clone().unwrap_or_default();
                system_dialogs::render_logs_dialog(f, rect, &logger, self.scroll_offset, &mut self.scrollbar_state);
            }
        }
    }
}
