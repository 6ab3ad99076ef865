//! Core UI functionality for the Chunklist application.
//!
//! This module contains the building blocks every component relies on:
//! event polling, the action vocabulary, the component trait, and background
//! task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background backend calls reported back as actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and own their local state
//! 2. **Actions** are returned upward instead of calling into the parent
//! 3. **Events** are polled by the [`EventHandler`]
//! 4. **Backend calls** run on the [`TaskManager`] and come back as actions

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, RequestToken};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager, TaskResult};
