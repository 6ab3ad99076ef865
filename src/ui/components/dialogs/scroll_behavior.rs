//! Offset arithmetic shared by every scrollable dialog.
//!
//! Offsets may run past the end of the content; renderers clamp them against
//! the real line count, so these helpers only guard against underflow.

use ratatui::widgets::ScrollbarState;

const PAGE_LINES: usize = 10;

fn set(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState, value: usize) {
    *scroll_offset = value;
    *scrollbar_state = scrollbar_state.position(value);
}

pub fn scroll_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, scroll_offset.saturating_sub(1));
}

pub fn scroll_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, scroll_offset.saturating_add(1));
}

pub fn page_up(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, scroll_offset.saturating_sub(PAGE_LINES));
}

pub fn page_down(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, scroll_offset.saturating_add(PAGE_LINES));
}

pub fn scroll_to_top(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, 0);
}

pub fn scroll_to_bottom(scroll_offset: &mut usize, scrollbar_state: &mut ScrollbarState) {
    set(scroll_offset, scrollbar_state, usize::MAX);
}
