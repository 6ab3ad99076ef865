use chunklist::ui::core::actions::{Action, DialogType};
use chunklist::QuestionFilter;

#[test]
fn test_actions_are_cloneable() {
    let action = Action::EditChunk {
        id: "c1".to_string(),
        content: "new text".to_string(),
    };
    match action.clone() {
        Action::EditChunk { id, content } => {
            assert_eq!(id, "c1");
            assert_eq!(content, "new text");
        }
        other => panic!("unexpected clone {:?}", other),
    }
}

#[test]
fn test_fetch_result_carries_error_text() {
    let action = Action::ChunkFetched {
        token: 3,
        result: Err("timeout".to_string()),
    };
    let debug = format!("{:?}", action);
    assert!(debug.contains("timeout"));
    assert!(debug.contains('3'));
}

#[test]
fn test_dialog_variants_debug() {
    let dialog = DialogType::ChunkEdit {
        chunk_id: "c1".to_string(),
        content: String::new(),
    };
    assert!(format!("{:?}", Action::ShowDialog(dialog)).contains("ChunkEdit"));
    assert!(format!("{:?}", Action::SetQuestionFilter(QuestionFilter::Generated)).contains("Generated"));
}
