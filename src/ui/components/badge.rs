use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::icons::IconService;

/// Create badges with parentheses for sizes and counts
#[must_use]
pub fn create_paren_badge(text: &str) -> Span<'static> {
    Span::styled(
        format!("({text})"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Question count badge: green once questions exist, gray otherwise
#[must_use]
pub fn create_question_badge(icons: &IconService, count: usize) -> Span<'static> {
    let style = if count > 0 {
        Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!("{} {}", icons.questions(), count), style)
}

/// Content size in characters, abbreviated above a thousand
#[must_use]
pub fn create_size_badge(size: usize) -> Span<'static> {
    create_paren_badge(&format_size(size))
}

#[must_use]
pub fn format_size(size: usize) -> String {
    if size >= 1000 {
        format!("{:.1}k chars", size as f64 / 1000.0)
    } else {
        format!("{} chars", size)
    }
}
