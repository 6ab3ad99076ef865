use chunklist::chunks::Selection;

#[test]
fn test_toggle_appends_and_removes() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.toggle("b");
    assert_eq!(selection.ids(), &["a".to_string(), "b".to_string()]);

    selection.toggle("a");
    assert_eq!(selection.ids(), &["b".to_string()]);
    assert!(!selection.contains("a"));
}

#[test]
fn test_toggle_twice_restores() {
    let mut selection = Selection::new();
    selection.toggle("x");
    let before = selection.clone();

    selection.toggle("y");
    selection.toggle("y");
    assert_eq!(selection, before);
}

#[test]
fn test_toggle_all_selects_everything_in_order() {
    let mut selection = Selection::new();
    selection.toggle("c");
    selection.toggle_all(["a", "b", "c"]);
    assert_eq!(selection.ids(), &["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn test_toggle_all_twice_clears() {
    let mut selection = Selection::new();
    let all = ["a", "b", "c"];
    selection.toggle_all(all);
    assert_eq!(selection.len(), 3);
    selection.toggle_all(all);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_compares_counts_only() {
    // A stale selection with the same length as the record set counts as "all selected"
    let mut selection = Selection::new();
    selection.toggle("gone-1");
    selection.toggle("gone-2");
    selection.toggle_all(["a", "b"]);
    assert!(selection.is_empty());
}

#[test]
fn test_toggle_all_on_empty_set() {
    let mut selection = Selection::new();
    selection.toggle_all(std::iter::empty::<&str>());
    assert!(selection.is_empty());
}

#[test]
fn test_clear() {
    let mut selection = Selection::new();
    selection.toggle("a");
    selection.clear();
    assert!(selection.is_empty());
}
