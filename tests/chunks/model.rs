use super::chunk;
use chunklist::chunks::{Chunk, ModelInfo, QuestionFilter};

fn with_questions(id: &str, count: usize) -> Chunk {
    let mut c = chunk(id, "f", "part-1");
    c.question_count = count;
    c
}

#[test]
fn test_chunk_deserializes_camel_case() {
    let json = r#"{
        "id": "c1",
        "projectId": "p1",
        "fileId": "f1",
        "fileName": "guide.md",
        "name": "guide-part-2",
        "content": "Hello",
        "size": 5,
        "questionCount": 4
    }"#;
    let chunk: Chunk = serde_json::from_str(json).unwrap();
    assert_eq!(chunk.file_id, "f1");
    assert_eq!(chunk.file_name, "guide.md");
    assert_eq!(chunk.question_count, 4);
    assert_eq!(chunk.part_number(), 2);
}

#[test]
fn test_chunk_optional_fields_default() {
    let json = r#"{"id": "c1", "fileId": "f1", "name": "intro"}"#;
    let chunk: Chunk = serde_json::from_str(json).unwrap();
    assert!(chunk.content.is_empty());
    assert_eq!(chunk.size, 0);
    assert!(!chunk.has_questions());
}

#[test]
fn test_preview_skips_blank_lines_and_truncates() {
    let mut c = chunk("c", "f", "part-1");
    c.content = "\n   \n  First real line of text  \nsecond".to_string();
    assert_eq!(c.preview(100), "First real line of text");
    assert_eq!(c.preview(10), "First r...");
}

#[test]
fn test_preview_counts_characters_not_bytes() {
    let mut c = chunk("c", "f", "part-1");
    c.content = "ééééé".to_string();
    assert_eq!(c.preview(5), "ééééé");
}

#[test]
fn test_question_filter() {
    let chunks = vec![with_questions("none", 0), with_questions("some", 3)];

    assert_eq!(QuestionFilter::All.apply(&chunks).len(), 2);

    let generated = QuestionFilter::Generated.apply(&chunks);
    assert_eq!(generated.len(), 1);
    assert_eq!(generated[0].id, "some");

    let ungenerated = QuestionFilter::Ungenerated.apply(&chunks);
    assert_eq!(ungenerated.len(), 1);
    assert_eq!(ungenerated[0].id, "none");
}

#[test]
fn test_question_filter_cycle() {
    let filter = QuestionFilter::default();
    assert_eq!(filter, QuestionFilter::All);
    assert_eq!(filter.next(), QuestionFilter::Generated);
    assert_eq!(filter.next().next(), QuestionFilter::Ungenerated);
    assert_eq!(filter.next().next().next(), QuestionFilter::All);
}

#[test]
fn test_model_info() {
    assert!(!ModelInfo::default().is_configured());
    assert!(!ModelInfo::new("openai", "  ").is_configured());

    let model = ModelInfo::new("openai", "gpt-4o");
    assert!(model.is_configured());
    assert_eq!(model.display_name(), "openai/gpt-4o");
    assert_eq!(ModelInfo::new("", "local").display_name(), "local");
}
