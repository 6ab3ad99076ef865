use chunklist::ui::core::event_handler::{EventHandler, EventType};

#[test]
fn test_event_type_enum_exists() {
    let event_size = std::mem::size_of::<EventType>();
    assert!(event_size > 0, "EventType enum should have a non-zero size");
}

#[test]
fn test_event_handler_constructors() {
    let _default = EventHandler::default();
    let _fast = EventHandler::with_tick_rate(tokio::time::Duration::from_millis(10));
}
