use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Creates a styled main dialog block
pub fn create_dialog_block(title: String, theme_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Render `text` with a block cursor inserted at character index `cursor`
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let cursor_char = "█";
    let byte_pos: usize = text.chars().take(cursor).map(char::len_utf8).sum();
    format!("{}{}{}", &text[..byte_pos], cursor_char, &text[byte_pos..])
}

/// Creates an input field block with a visual cursor
pub fn create_input_paragraph(input_buffer: &str, cursor: usize, field_title: &str) -> Paragraph<'static> {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(with_cursor(input_buffer, cursor))
        .block(input_block)
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Slice `lines` to the window starting at `scroll_offset`, clamped so the
/// last page stays full, and sync the scrollbar state with it.
pub fn visible_window<'a>(
    lines: &[&'a str],
    scroll_offset: usize,
    visible_height: usize,
    scrollbar_state: &mut ScrollbarState,
) -> Vec<&'a str> {
    let max_scroll = lines.len().saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(lines.len())
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    lines.iter().skip(clamped_offset).take(visible_height).copied().collect()
}

/// Vertical scrollbar used inside dialogs
pub fn render_dialog_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Gray, " Close");
    pub const ENTER_SAVE: InstructionShortcut = ("Enter", Color::Green, " Save");
    pub const NEW_LINE: InstructionShortcut = ("Alt+Enter/Ctrl+J", Color::Cyan, " New line");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter/y", Color::Red, " Delete");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}
