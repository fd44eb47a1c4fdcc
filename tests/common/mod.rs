//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io;

use stylebuf::{
    Document, Editor, EditorOptions, EditorState, HistoryStack, MemorySnapshotStore,
    SnapshotLoadError, SnapshotStore, StyleKind,
};

/// Editor over an in-memory store, starting with unstyled `text`
pub fn test_editor(text: &str) -> Editor {
    test_editor_with_options(text, EditorOptions::default())
}

pub fn test_editor_with_options(text: &str, options: EditorOptions) -> Editor {
    let state = EditorState {
        document: Document::with_text(text),
        history: HistoryStack::new(),
    };
    Editor::with_state(state, Box::new(MemorySnapshotStore::new()), options)
}

/// Plain document text
pub fn text(editor: &Editor) -> String {
    editor.document().text()
}

/// Indices of cells with `kind` set
pub fn styled_indices(editor: &Editor, kind: StyleKind) -> Vec<usize> {
    editor
        .document()
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.style(kind))
        .map(|(i, _)| i)
        .collect()
}

/// A store whose writes always fail
pub struct FailingStore;

impl SnapshotStore for FailingStore {
    fn load(&self) -> Result<Option<EditorState>, SnapshotLoadError> {
        Ok(None)
    }

    fn save(&self, _state: &EditorState) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }
}
