use chunklist::Chunk;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

#[path = "app_component.rs"]
mod app_component;

#[path = "components.rs"]
mod components;

#[path = "core.rs"]
mod ui_core;

pub fn chunk(id: &str, file_id: &str, name: &str) -> Chunk {
    Chunk {
        id: id.to_string(),
        project_id: "p1".to_string(),
        file_id: file_id.to_string(),
        file_name: format!("{}.md", file_id),
        name: name.to_string(),
        content: format!("Content of {}", name),
        size: 12,
        question_count: 0,
    }
}

/// `count` chunks of one file, named part-1 through part-count
pub fn chunks(count: usize) -> Vec<Chunk> {
    (1..=count)
        .map(|part| chunk(&format!("c{}", part), "f1", &format!("doc-part-{}", part)))
        .collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Rendered buffer flattened to text, one line per row
pub fn buffer_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
