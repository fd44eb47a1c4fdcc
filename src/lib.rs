//! stylebuf - a styled text buffer with operation-based undo/redo
//!
//! This crate provides the core types for an in-memory rich-text buffer:
//! characters carrying bold/italic/underline flags, positional insert and
//! delete, and an undo/redo engine over recorded operations.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod model;
pub mod persistence;
pub mod render;
pub mod tracing;

// Re-export commonly used types
pub use config::EditorConfig;
pub use model::{
    Cell, Document, Editor, EditorOptions, EditorState, HistoryStack, IndexOutOfRange, Operation,
    StyleKind,
};
pub use persistence::{FileSnapshotStore, MemorySnapshotStore, SnapshotLoadError, SnapshotStore};
pub use render::{MarkerStyle, StyleMarkers};
