//! Chunk records and the list bookkeeping built on top of them.
//!
//! A chunk is one segment of a larger source document. Chunks belong to a
//! file and carry a part number embedded in their name (`"part-3"`), which
//! gives a stable reading order inside each file.
//!
//! # Module Components
//!
//! - [`ordering`] - Reading-order sort by file then part number
//! - [`pagination`] - Fixed-size page slicing
//! - [`selection`] - Toggle-based selection set for batch actions

use serde::{Deserialize, Serialize};

pub mod ordering;
pub mod pagination;
pub mod selection;

pub use ordering::{compare_chunks, part_number, sort_chunks};
pub use pagination::Pagination;
pub use selection::Selection;

/// A text chunk as returned by the chunk service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    pub id: String,
    #[serde(default)]
    pub project_id: String,
    pub file_id: String,
    /// Human-readable source file name, display only
    #[serde(default)]
    pub file_name: String,
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub question_count: usize,
}

impl Chunk {
    /// Part number embedded in the chunk name, 0 when absent
    #[must_use]
    pub fn part_number(&self) -> u64 {
        part_number(&self.name)
    }

    /// Whether questions were already generated for this chunk
    #[must_use]
    pub fn has_questions(&self) -> bool {
        self.question_count > 0
    }

    /// First line of the content, truncated to `max_chars` characters
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
        let trimmed = first_line.trim();

        if trimmed.chars().count() > max_chars {
            let cut: String = trimmed.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{cut}...")
        } else {
            trimmed.to_string()
        }
    }
}

/// Filter applied by the parent before handing chunks to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionFilter {
    #[default]
    All,
    Generated,
    Ungenerated,
}

impl QuestionFilter {
    #[must_use]
    pub fn matches(&self, chunk: &Chunk) -> bool {
        match self {
            Self::All => true,
            Self::Generated => chunk.has_questions(),
            Self::Ungenerated => !chunk.has_questions(),
        }
    }

    /// Cycle: All -> Generated -> Ungenerated -> All
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Generated,
            Self::Generated => Self::Ungenerated,
            Self::Ungenerated => Self::All,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Generated => "with questions",
            Self::Ungenerated => "without questions",
        }
    }

    /// Keep only the chunks this filter accepts
    #[must_use]
    pub fn apply(&self, chunks: &[Chunk]) -> Vec<Chunk> {
        chunks.iter().filter(|chunk| self.matches(chunk)).cloned().collect()
    }
}

/// The model questions get generated with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub provider: String,
    pub name: String,
}

impl ModelInfo {
    #[must_use]
    pub fn new(provider: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// `provider/name`, or just the name when no provider is set
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.provider.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.provider, self.name)
        }
    }
}
