//! Editor model - the styled document, its operation history, and the
//! editor that ties them together.

pub mod cell;
pub mod document;
pub mod editor;
pub mod history;
pub mod operation;

pub use cell::{Cell, StyleKind};
pub use document::{Document, IndexOutOfRange};
pub use editor::{Editor, EditorOptions, EditorState};
pub use history::HistoryStack;
pub use operation::Operation;
