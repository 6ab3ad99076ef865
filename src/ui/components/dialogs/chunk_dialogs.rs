//! Dialogs owned by the chunk list: detail view and delete confirmation.

use super::common::{
    create_dialog_block, create_instructions_paragraph, render_dialog_scrollbar, shortcuts, visible_window,
};
use crate::chunks::Chunk;
use crate::icons::IconService;
use crate::ui::components::badge::format_size;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

/// What the view dialog currently has to show
#[derive(Debug, Clone, Copy)]
pub enum ChunkViewContent<'a> {
    Loaded(&'a Chunk),
    Failed(&'a str),
}

fn metadata_lines(chunk: &Chunk, icons: &IconService) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let file_label = if chunk.file_name.is_empty() {
        chunk.file_id.clone()
    } else {
        format!("{} ({})", chunk.file_name, chunk.file_id)
    };

    vec![
        Line::from(vec![
            Span::styled(format!("{} File: ", icons.file()), label),
            Span::styled(file_label, value),
        ]),
        Line::from(vec![
            Span::styled("Part: ", label),
            Span::styled(chunk.part_number().to_string(), value),
            Span::raw("   "),
            Span::styled("Size: ", label),
            Span::styled(format_size(chunk.size.max(chunk.content.chars().count())), value),
            Span::raw("   "),
            Span::styled(format!("{} Questions: ", icons.questions()), label),
            Span::styled(chunk.question_count.to_string(), value),
        ]),
    ]
}

pub fn render_chunk_view_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    content: ChunkViewContent<'_>,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, dialog_area);

    let (title, color) = match content {
        ChunkViewContent::Loaded(chunk) => (format!(" {} {} ", icons.chunks_title(), chunk.name), Color::Cyan),
        ChunkViewContent::Failed(_) => (format!(" {} Chunk ", icons.error()), Color::Red),
    };
    let block = create_dialog_block(title, color);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let instructions = create_instructions_paragraph(&[shortcuts::SCROLL, shortcuts::SEPARATOR, shortcuts::ESC_CLOSE]);
    f.render_widget(instructions, sections[2]);

    match content {
        ChunkViewContent::Failed(message) => {
            let paragraph = Paragraph::new(format!("{} {}", icons.error(), message))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, sections[1]);
        }
        ChunkViewContent::Loaded(chunk) => {
            f.render_widget(Paragraph::new(metadata_lines(chunk, icons)), sections[0]);

            let body_area = sections[1];
            let lines: Vec<&str> = chunk.content.lines().collect();
            let visible_height = body_area.height as usize;
            let overflow = lines.len() > visible_height;
            let text = visible_window(&lines, scroll_offset, visible_height, scrollbar_state).join("\n");

            let body = Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false });
            f.render_widget(body, body_area);

            if overflow {
                render_dialog_scrollbar(f, body_area, scrollbar_state);
            }
        }
    }
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, chunk_name: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 6, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} Confirm Delete ", icons.warning()), Color::Red);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(format!("Delete chunk \"{}\"? This cannot be undone.", chunk_name))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions = create_instructions_paragraph(&[
        shortcuts::ENTER_CONFIRM,
        shortcuts::SEPARATOR,
        ("Esc/n", Color::Gray, " Cancel"),
    ]);

    f.render_widget(message, sections[0]);
    f.render_widget(instructions, sections[1]);
}
