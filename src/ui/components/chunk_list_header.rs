//! Header row of the chunk list: select-all, totals, filter, model, batch hint.

use crate::chunks::{ModelInfo, QuestionFilter};
use crate::constants::TEXT_NO_MODEL;
use crate::icons::IconService;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by the header including its borders
pub const HEADER_HEIGHT: u16 = 4;

/// Everything the header shows, borrowed from the list and its parent
#[derive(Debug, Clone, Copy)]
pub struct ChunkListHeader<'a> {
    pub project_id: &'a str,
    pub total_chunks: usize,
    pub selected_count: usize,
    pub question_filter: QuestionFilter,
    pub selected_model: &'a ModelInfo,
    pub icons: &'a IconService,
}

impl ChunkListHeader<'_> {
    /// Checkbox glyph for the select-all control
    pub fn select_all_icon(&self) -> &'static str {
        if self.total_chunks > 0 && self.selected_count == self.total_chunks {
            self.icons.checkbox(true)
        } else if self.selected_count > 0 {
            self.icons.checkbox_partial()
        } else {
            self.icons.checkbox(false)
        }
    }

    /// Batch generation needs a selection and a model
    pub fn batch_enabled(&self) -> bool {
        self.selected_count > 0 && self.selected_model.is_configured()
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::Gray);
        let value_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let first_line = Line::from(vec![
            Span::styled(format!("{} ", self.select_all_icon()), value_style),
            Span::styled("Select all (a)", label_style),
            Span::raw("   "),
            Span::styled(format!("{} Chunks: ", self.icons.chunks_title()), label_style),
            Span::styled(self.total_chunks.to_string(), value_style),
            Span::raw("   "),
            Span::styled("Selected: ", label_style),
            Span::styled(self.selected_count.to_string(), value_style),
        ]);

        let model_span = if self.selected_model.is_configured() {
            Span::styled(self.selected_model.display_name(), Style::default().fg(Color::Cyan))
        } else {
            Span::styled(TEXT_NO_MODEL, Style::default().fg(Color::Red))
        };

        let batch_style = if self.batch_enabled() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let second_line = Line::from(vec![
            Span::styled("Filter (f): ", label_style),
            Span::styled(self.question_filter.label(), value_style),
            Span::raw("   "),
            Span::styled(format!("{} ", self.icons.model()), label_style),
            model_span,
            Span::raw("   "),
            Span::styled(
                format!("B: generate questions for {} selected", self.selected_count),
                batch_style,
            ),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Project {} ", self.project_id));

        let paragraph = Paragraph::new(vec![first_line, second_line]).block(block);
        f.render_widget(paragraph, area);
    }
}
