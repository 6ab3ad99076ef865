//! Chunklist - a terminal browser for the text chunks of a dataset project
//!
//! The library renders a paginated, selectable list of text chunks and lets
//! the user view, edit, delete and generate questions for them. All data
//! access goes through a pluggable backend: the HTTP chunk service or an
//! in-process store.
//!
//! # Modules
//!
//! * [`backend`] - Chunk service abstraction and its implementations
//! * [`chunks`] - Chunk records, ordering, pagination and selection
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Backend abstraction over the chunk service
pub mod backend;

/// Chunk records and the list bookkeeping around them
pub mod chunks;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use chunks::{Chunk, ModelInfo, QuestionFilter};
