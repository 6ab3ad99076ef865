use super::common::{
    create_dialog_block, create_input_paragraph, create_instructions_paragraph, render_dialog_scrollbar, shortcuts,
    visible_window,
};
use crate::constants::DIALOG_TITLE_LOGS;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
CHUNKLIST - Text Chunk Browser
==============================

CHUNK LIST
----------
j/k, ↑↓         Move focus between chunks on the page
l/h, n/p        Next / previous page
PageDown/PageUp Next / previous page
Space           Select or deselect the focused chunk
a               Select all chunks (again to clear)
Enter, v        View the focused chunk
e               Edit the focused chunk
d               Delete the focused chunk (with confirmation)
g               Generate questions for the focused chunk
B               Generate questions for every selected chunk
f               Cycle question filter (all / with / without)
r               Reload chunks from the service

VIEW DIALOG
-----------
j/k             Scroll content
Esc, q, Enter   Close

DELETE DIALOG
-------------
Enter, y        Confirm delete
Esc, n          Cancel

EDIT DIALOG
-----------
Enter           Save content
Alt+Enter       Insert a line break (also Ctrl+J)
Esc             Cancel

GENERAL
-------
?               Toggle this help
L               Show logs
q, Ctrl+C       Quit

Chunks are ordered by file, then by the part number in their name.
Five chunks are shown per page.
";

/// Wrapped error text with a scrollbar when it overflows
pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} Error", icons.error()))
        .style(Style::default().fg(Color::Red));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflow = lines.len() > visible_height;
    let text = if overflow {
        visible_window(&lines, scroll_offset, visible_height, scrollbar_state).join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    let instructions_paragraph = Paragraph::new("Press any key to continue • j/k to scroll if needed")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflow {
        render_dialog_scrollbar(f, content_area, scrollbar_state);
    }
}

/// Full-screen overlay listing lines with a scrollbar
fn render_overlay(f: &mut Frame, area: Rect, title: &str, content: &str, scroll_offset: usize, state: &mut ScrollbarState) {
    let overlay_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, overlay_area);

    let content_area = Rect::new(
        overlay_area.x + 2,
        overlay_area.y + 1,
        overlay_area.width.saturating_sub(4),
        overlay_area.height.saturating_sub(2),
    );

    let lines: Vec<&str> = content.lines().collect();
    let visible_height = content_area.height.saturating_sub(2) as usize;
    let text = visible_window(&lines, scroll_offset, visible_height, state).join("\n");

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, content_area);

    if lines.len() > visible_height {
        render_dialog_scrollbar(f, content_area, state);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) {
    render_overlay(
        f,
        area,
        "Help - Press 'Esc' or '?' to close",
        HELP_TEXT,
        scroll_offset,
        scrollbar_state,
    );
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_overlay(
        f,
        area,
        DIALOG_TITLE_LOGS,
        &content,
        scroll_offset,
        scrollbar_state,
    );
}

/// Multi-line edit box for a chunk's content
pub fn render_chunk_edit_dialog(f: &mut Frame, area: Rect, icons: &IconService, input_buffer: &str, cursor: usize) {
    let dialog_area = LayoutManager::centered_rect(70, 50, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(format!(" {} Edit Chunk ", icons.file()), Color::Yellow);
    let inner = main_block.inner(dialog_area);
    f.render_widget(main_block, dialog_area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);

    f.render_widget(create_input_paragraph(input_buffer, cursor, "Content"), sections[0]);
    f.render_widget(
        create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::NEW_LINE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]),
        sections[1],
    );
}
