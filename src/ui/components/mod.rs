//! Reusable UI components

pub mod badge;
pub mod chunk_card_component;
pub mod chunk_list_header;
pub mod dialogs;
pub mod scrollbar_helper;
pub mod status_bar;

// Component architecture
pub mod chunk_list_component;
pub mod dialog_component;

// Component exports
pub use chunk_card_component::ChunkCard;
pub use chunk_list_component::ChunkListComponent;
pub use chunk_list_header::ChunkListHeader;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
