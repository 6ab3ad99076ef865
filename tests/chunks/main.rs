#[path = "model.rs"]
mod model;

#[path = "ordering.rs"]
mod ordering;


#[path = "selection.rs"]
mod selection;

use chunklist::chunks::Chunk;

/// Minimal chunk for ordering and list tests
pub fn chunk(id: &str, file_id: &str, name: &str) -> Chunk {
    Chunk {
        id: id.to_string(),
        project_id: "p1".to_string(),
        file_id: file_id.to_string(),
        file_name: String::new(),
        name: name.to_string(),
        content: String::new(),
        size: 0,
        question_count: 0,
    }
}
