use chunklist::ui::components::status_bar::{StatusBar, StatusInfo};

#[test]
fn test_loading_wins() {
    let text = StatusBar::text(StatusInfo {
        loading: true,
        active_tasks: 2,
        message: Some("done"),
    });
    assert_eq!(text, "Loading chunks...");
}

#[test]
fn test_active_tasks_shown_before_message() {
    let text = StatusBar::text(StatusInfo {
        loading: false,
        active_tasks: 2,
        message: Some("done"),
    });
    assert!(text.contains("2 background operation(s)"));
}

#[test]
fn test_message_then_shortcuts() {
    let text = StatusBar::text(StatusInfo {
        message: Some("✅ Chunk deleted: c1"),
        ..StatusInfo::default()
    });
    assert_eq!(text, "✅ Chunk deleted: c1");

    let idle = StatusBar::text(StatusInfo::default());
    assert!(idle.contains("q: quit"));
}
