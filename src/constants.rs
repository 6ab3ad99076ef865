//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// List Layout
/// Number of chunk cards shown per page
pub const CHUNKS_PER_PAGE: usize = 5;
/// Default number of content characters shown on a chunk card
pub const PREVIEW_DEFAULT_CHARS: usize = 120;
/// Minimum configurable preview length
pub const PREVIEW_MIN_CHARS: usize = 20;
/// Maximum configurable preview length
pub const PREVIEW_MAX_CHARS: usize = 2000;

// Service
/// Default base URL of the chunk service
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:1717";
/// Default environment variable holding the service token
pub const DEFAULT_TOKEN_ENV: &str = "CHUNKLIST_API_TOKEN";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound for the request timeout in seconds
pub const MAX_TIMEOUT_SECS: u64 = 300;
/// Questions the in-memory backend adds per generated chunk
pub const MEMORY_QUESTIONS_PER_CHUNK: usize = 3;

// UI Text
pub const TEXT_NO_CHUNKS: &str = "No text chunks yet";
pub const TEXT_LOADING_CHUNKS: &str = "Loading chunks...";
pub const TEXT_FETCHING_CHUNK: &str = "Fetching chunk...";
pub const TEXT_NO_MODEL: &str = "no model selected";

// Success Messages
pub const SUCCESS_CHUNK_DELETED: &str = "✅ Chunk deleted";
pub const SUCCESS_CHUNK_UPDATED: &str = "✅ Chunk updated";
pub const SUCCESS_QUESTIONS_GENERATED: &str = "✅ Questions generated";

// Error Messages
pub const ERROR_CHUNK_DELETE_FAILED: &str = "❌ Failed to delete chunk";
pub const ERROR_CHUNK_UPDATE_FAILED: &str = "❌ Failed to update chunk";
pub const ERROR_CHUNK_FETCH_FAILED: &str = "❌ Failed to load chunk";
pub const ERROR_CHUNKS_LOAD_FAILED: &str = "❌ Failed to load chunks";
pub const ERROR_QUESTIONS_FAILED: &str = "❌ Failed to generate questions";
pub const ERROR_NO_MODEL: &str = "❌ Select a model in the [model] config section before generating questions";
pub const ERROR_NO_PROJECT: &str = "❌ Error: no project id given (pass it as an argument or set service.project_id)";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'L' or 'q' to close";
