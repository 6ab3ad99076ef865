//! Position scrollbar for the chunk list.
//!
//! The list only ever shows one page, so the scrollbar tracks where the
//! focused card sits within the whole record set rather than a scroll offset.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// `position` is the absolute index of the focused record
    pub fn update_state(&mut self, total_items: usize, position: usize, page_size: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .viewport_content_length(page_size)
            .position(position.min(total_items.saturating_sub(1)));
    }

    /// Only shown when records span more than one page
    pub fn needs_scrollbar(total_items: usize, page_size: usize) -> bool {
        total_items > page_size
    }

    /// Column inside the right border of a bordered block
    pub fn scrollbar_area(rect: Rect) -> Rect {
        Rect {
            x: rect.x + rect.width.saturating_sub(1),
            y: rect.y + 1,
            width: 1,
            height: rect.height.saturating_sub(2),
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(Color::DarkGray))
            .thumb_style(Style::default().fg(Color::Gray));

        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
