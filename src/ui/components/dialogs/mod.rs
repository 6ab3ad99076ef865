//! Dialog renderers

pub mod chunk_dialogs;
pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use chunk_dialogs::{render_chunk_view_dialog, render_delete_confirmation_dialog, ChunkViewContent};
pub use system_dialogs::{
    render_chunk_edit_dialog, render_error_dialog, render_help_dialog, render_logs_dialog,
};
