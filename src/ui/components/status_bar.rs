//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

const SHORTCUTS: &str = "Space: select • a: all • Enter: view • e: edit • d: delete • B: generate • ?: help • q: quit";

/// What the status bar reflects about the application
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusInfo<'a> {
    pub loading: bool,
    pub active_tasks: usize,
    pub message: Option<&'a str>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn text(status: StatusInfo<'_>) -> String {
        if status.loading {
            "Loading chunks...".to_string()
        } else if status.active_tasks > 0 {
            format!("⟳ {} background operation(s) running", status.active_tasks)
        } else if let Some(message) = status.message {
            message.to_string()
        } else {
            SHORTCUTS.to_string()
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: StatusInfo<'_>) {
        let status_color = if status.loading || status.active_tasks > 0 {
            Color::Yellow
        } else if status.message.is_some_and(|m| m.starts_with('❌')) {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::text(status))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
