use chunklist::ui::components::scrollbar_helper::ScrollbarHelper;
use ratatui::layout::Rect;
use ratatui::widgets::ScrollbarState;

#[test]
fn test_needs_scrollbar_only_past_one_page() {
    assert!(!ScrollbarHelper::needs_scrollbar(0, 5));
    assert!(!ScrollbarHelper::needs_scrollbar(5, 5));
    assert!(ScrollbarHelper::needs_scrollbar(6, 5));
}

#[test]
fn test_scrollbar_area_sits_inside_right_border() {
    let area = ScrollbarHelper::scrollbar_area(Rect::new(2, 3, 40, 12));
    assert_eq!(area, Rect::new(41, 4, 1, 10));
}

#[test]
fn test_scrollbar_area_on_tiny_rect() {
    let area = ScrollbarHelper::scrollbar_area(Rect::new(0, 0, 0, 1));
    assert_eq!(area.width, 1);
    assert_eq!(area.height, 0);
}

#[test]
fn test_update_state_clamps_position() {
    let mut helper = ScrollbarHelper::new();
    helper.update_state(7, 50, 5);
    let expected = ScrollbarState::new(7).viewport_content_length(5).position(6);
    assert_eq!(*helper.state(), expected);
}
