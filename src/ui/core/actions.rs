use crate::chunks::{Chunk, QuestionFilter};

/// Token identifying one detail fetch. Only the newest token is applied.
pub type RequestToken = u64;

#[derive(Debug, Clone)]
pub enum Action {
    // Chunk operations requested by the list
    DeleteChunk(String),
    EditChunk {
        id: String,
        content: String,
    },
    GenerateQuestions(Vec<String>),
    SetQuestionFilter(QuestionFilter),

    // Detail fetch for the view dialog
    FetchChunk {
        token: RequestToken,
        chunk_id: String,
    },
    ChunkFetched {
        token: RequestToken,
        result: Result<Chunk, String>,
    },

    // Data loading
    RefreshChunks,
    ChunksLoaded(Vec<Chunk>),
    ChunksLoadFailed(String),
    OperationCompleted(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    ChunkEdit { chunk_id: String, content: String },
    Error(String),
    Help,
    Logs,
}
