use crate::chunks::Chunk;
use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::ui::components::badge::{create_question_badge, create_size_badge};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// One chunk rendered as a two-line card: a title row and a content excerpt.
#[derive(Debug, Clone)]
pub struct ChunkCard<'a> {
    pub chunk: &'a Chunk,
    /// Marked in the selection set (checkbox), not the keyboard focus
    pub selected: bool,
    pub icons: &'a IconService,
    pub display_config: &'a DisplayConfig,
    pub preview_chars: usize,
}

impl<'a> ChunkCard<'a> {
    pub fn new(
        chunk: &'a Chunk,
        selected: bool,
        icons: &'a IconService,
        display_config: &'a DisplayConfig,
        preview_chars: usize,
    ) -> Self {
        Self {
            chunk,
            selected,
            icons,
            display_config,
            preview_chars,
        }
    }

    /// Render this card as a list item. `focused` marks the keyboard cursor.
    pub fn render(&self, focused: bool) -> ListItem<'static> {
        let mut title_spans = Vec::new();

        let checkbox_style = if self.selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        title_spans.push(Span::styled(
            format!("{} ", self.icons.checkbox(self.selected)),
            checkbox_style,
        ));

        let name_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        title_spans.push(Span::styled(self.chunk.name.clone(), name_style));

        if self.display_config.show_file_names {
            let file_label = if self.chunk.file_name.is_empty() {
                &self.chunk.file_id
            } else {
                &self.chunk.file_name
            };
            title_spans.push(Span::raw(" "));
            title_spans.push(Span::styled(
                format!("{} {}", self.icons.file(), file_label),
                Style::default().fg(Color::Cyan),
            ));
        }

        if self.display_config.show_question_counts {
            title_spans.push(Span::raw(" "));
            title_spans.push(create_question_badge(self.icons, self.chunk.question_count));
        }

        if self.chunk.size > 0 {
            title_spans.push(Span::raw(" "));
            title_spans.push(create_size_badge(self.chunk.size));
        }

        let mut lines = vec![Line::from(title_spans)];

        if self.display_config.show_content_preview {
            let preview = self.chunk.preview(self.preview_chars);
            if !preview.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", preview),
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )));
            }
        }

        ListItem::new(lines)
    }

    /// Rows this card occupies in the list
    pub fn height(&self) -> usize {
        if self.display_config.show_content_preview && !self.chunk.preview(self.preview_chars).is_empty() {
            2
        } else {
            1
        }
    }
}
