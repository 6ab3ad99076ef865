use chunklist::icons::IconService;
use chunklist::ui::components::badge::*;
use ratatui::style::Color;

#[test]
fn test_create_paren_badge() {
    let badge = create_paren_badge("test");
    assert!(badge.content.contains("(test)"), "Paren badge should contain parentheses");
}

#[test]
fn test_format_size() {
    assert_eq!(format_size(0), "0 chars");
    assert_eq!(format_size(999), "999 chars");
    assert_eq!(format_size(1000), "1.0k chars");
    assert_eq!(format_size(2450), "2.5k chars");
}

#[test]
fn test_size_badge_wraps_formatted_size() {
    let badge = create_size_badge(1500);
    assert_eq!(badge.content, "(1.5k chars)");
}

#[test]
fn test_question_badge_highlights_generated_chunks() {
    let icons = IconService::default();

    let none = create_question_badge(&icons, 0);
    assert!(none.content.ends_with(" 0"));
    assert_eq!(none.style.bg, None);

    let some = create_question_badge(&icons, 4);
    assert!(some.content.ends_with(" 4"));
    assert_eq!(some.style.bg, Some(Color::Green));
}
