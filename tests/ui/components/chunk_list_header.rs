use chunklist::icons::IconService;
use chunklist::ui::components::ChunkListHeader;
use chunklist::{ModelInfo, QuestionFilter};

fn header<'a>(icons: &'a IconService, model: &'a ModelInfo, total: usize, selected: usize) -> ChunkListHeader<'a> {
    ChunkListHeader {
        project_id: "p1",
        total_chunks: total,
        selected_count: selected,
        question_filter: QuestionFilter::All,
        selected_model: model,
        icons,
    }
}

#[test]
fn test_select_all_icon_states() {
    let icons = IconService::default();
    let model = ModelInfo::default();

    assert_eq!(header(&icons, &model, 7, 0).select_all_icon(), icons.checkbox(false));
    assert_eq!(header(&icons, &model, 7, 3).select_all_icon(), icons.checkbox_partial());
    assert_eq!(header(&icons, &model, 7, 7).select_all_icon(), icons.checkbox(true));
    assert_eq!(header(&icons, &model, 0, 0).select_all_icon(), icons.checkbox(false));
}

#[test]
fn test_batch_needs_selection_and_model() {
    let icons = IconService::default();
    let unset = ModelInfo::default();
    let model = ModelInfo::new("openai", "gpt-4o-mini");

    assert!(!header(&icons, &model, 7, 0).batch_enabled());
    assert!(!header(&icons, &unset, 7, 2).batch_enabled());
    assert!(header(&icons, &model, 7, 2).batch_enabled());
}
