//! Editor - applies mutations, records them, and drives undo/redo

use serde::{Deserialize, Serialize};

use super::cell::StyleKind;
use super::document::{Document, IndexOutOfRange};
use super::history::HistoryStack;
use super::operation::Operation;
use crate::persistence::{SnapshotLoadError, SnapshotStore};
use crate::render::{self, MarkerStyle, StyleMarkers};

/// Everything that is persisted as one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorState {
    pub document: Document,
    pub history: HistoryStack,
}

/// Behaviour switches for an [`Editor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Save a snapshot after every mutation. When off, only `flush` saves.
    pub autosave: bool,
    /// Discard the redo stack when the user makes a new edit
    pub clear_redo_on_edit: bool,
    /// Maximum number of undo entries kept, unbounded when `None`
    pub history_limit: Option<usize>,
    /// Markers used by [`Editor::render`]
    pub markers: MarkerStyle,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            autosave: true,
            clear_redo_on_edit: false,
            history_limit: None,
            markers: MarkerStyle::Ansi,
        }
    }
}

/// Who asked for a forward mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Redo,
}

/// Owns one [`EditorState`] and the store it is persisted to.
///
/// Every mutation runs to completion (mutate, record, persist) before
/// returning. A failed bounds check leaves both the document and the history
/// untouched.
pub struct Editor {
    state: EditorState,
    store: Box<dyn SnapshotStore>,
    options: EditorOptions,
    last_save_error: Option<std::io::Error>,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("last_save_error", &self.last_save_error)
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Load the stored state, or start empty if nothing was stored yet
    pub fn open(
        store: Box<dyn SnapshotStore>,
        options: EditorOptions,
    ) -> Result<Self, SnapshotLoadError> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self::with_state(state, store, options))
    }

    /// Start from an explicit state without loading
    pub fn with_state(
        mut state: EditorState,
        store: Box<dyn SnapshotStore>,
        options: EditorOptions,
    ) -> Self {
        state.history.set_max_size(options.history_limit);
        Self {
            state,
            store,
            options,
            last_save_error: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    pub fn document(&self) -> &Document {
        &self.state.document
    }

    pub fn history(&self) -> &HistoryStack {
        &self.state.history
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn can_undo(&self) -> bool {
        self.state.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.history.can_redo()
    }

    pub fn undo_count(&self) -> usize {
        self.state.history.undo_count()
    }

    pub fn redo_count(&self) -> usize {
        self.state.history.redo_count()
    }

    /// The error from the most recent failed autosave, cleared by the next
    /// successful save
    pub fn last_save_error(&self) -> Option<&std::io::Error> {
        self.last_save_error.as_ref()
    }

    // ========================================================================
    // Forward mutations
    // ========================================================================

    /// Append `text` at the end of the document
    pub fn add(&mut self, text: &str) -> Result<(), IndexOutOfRange> {
        self.insert(text, None, Origin::User)
    }

    /// Insert `text` so that it starts at `position`
    pub fn add_at(&mut self, text: &str, position: usize) -> Result<(), IndexOutOfRange> {
        self.insert(text, Some(position), Origin::User)
    }

    /// Remove the inclusive range `[from, to]`
    pub fn remove(&mut self, from: usize, to: usize) -> Result<(), IndexOutOfRange> {
        self.delete(from, to, Origin::User)
    }

    pub fn bold(&mut self, from: usize, to: usize) -> Result<(), IndexOutOfRange> {
        self.apply_style(StyleKind::Bold, from, to)
    }

    pub fn italic(&mut self, from: usize, to: usize) -> Result<(), IndexOutOfRange> {
        self.apply_style(StyleKind::Italic, from, to)
    }

    pub fn underline(&mut self, from: usize, to: usize) -> Result<(), IndexOutOfRange> {
        self.apply_style(StyleKind::Underline, from, to)
    }

    /// Switch `kind` on for every cell in `[from, to]`
    pub fn apply_style(
        &mut self,
        kind: StyleKind,
        from: usize,
        to: usize,
    ) -> Result<(), IndexOutOfRange> {
        self.style(kind, from, to, Origin::User)
    }

    fn insert(
        &mut self,
        text: &str,
        position: Option<usize>,
        origin: Origin,
    ) -> Result<(), IndexOutOfRange> {
        self.state.document.insert(text, position)?;
        self.record(Operation::insert(text, position), origin);
        Ok(())
    }

    fn delete(&mut self, from: usize, to: usize, origin: Origin) -> Result<(), IndexOutOfRange> {
        let removed = self.state.document.remove_range(from, to)?;
        self.record(Operation::delete(from, to, removed), origin);
        Ok(())
    }

    fn style(
        &mut self,
        kind: StyleKind,
        from: usize,
        to: usize,
        origin: Origin,
    ) -> Result<(), IndexOutOfRange> {
        self.state.document.set_style(kind, from, to, true)?;
        self.record(Operation::style_change(kind, from, to), origin);
        Ok(())
    }

    fn record(&mut self, op: Operation, origin: Origin) {
        tracing::debug!(
            op = op.label(),
            ?origin,
            delta = op.length_delta(),
            len = self.state.document.len(),
            "recorded edit"
        );
        if origin == Origin::User && self.options.clear_redo_on_edit {
            self.state.history.clear_redo();
        }
        self.state.history.push(op);
        self.persist();
    }

    // ========================================================================
    // Undo / redo
    // ========================================================================

    /// Reverse the newest recorded operation and move it onto the redo stack.
    ///
    /// Returns `false` if there was nothing to undo. An operation that does
    /// not fit the document (only possible with a snapshot whose history does
    /// not match its document) is dropped without touching the document.
    pub fn undo(&mut self) -> bool {
        let Some(op) = self.state.history.pop_undo() else {
            return false;
        };

        let undone = match self.invert(&op) {
            Ok(()) => {
                tracing::debug!(op = op.label(), len = self.state.document.len(), "undo");
                self.state.history.push_redo(op);
                true
            }
            Err(e) => {
                tracing::error!("Dropping {} that cannot be undone: {}", op.label(), e);
                false
            }
        };
        self.persist();
        undone
    }

    /// Re-apply the newest undone operation through the forward entry point,
    /// which records a fresh operation on the undo stack.
    ///
    /// Returns `Ok(false)` if there was nothing to redo. If the recorded
    /// range no longer fits the document, the operation is discarded and the
    /// document is left as it was.
    pub fn redo(&mut self) -> Result<bool, IndexOutOfRange> {
        let Some(op) = self.state.history.pop_redo() else {
            return Ok(false);
        };

        let result = match &op {
            Operation::Insert { text, position } => self.insert(text, *position, Origin::Redo),
            Operation::Delete { from, to, .. } => self.delete(*from, *to, Origin::Redo),
            Operation::StyleChange { kind, from, to } => {
                self.style(*kind, *from, *to, Origin::Redo)
            }
        };

        if let Err(e) = result {
            tracing::warn!("Discarding stale redo of {}: {}", op.label(), e);
            self.persist();
            return Err(e);
        }
        Ok(true)
    }

    fn invert(&mut self, op: &Operation) -> Result<(), IndexOutOfRange> {
        let document = &mut self.state.document;
        match op {
            // Blanket clear: the flag state before the operation is not recorded
            Operation::StyleChange { kind, from, to } => document.set_style(*kind, *from, *to, false),
            Operation::Insert { text, position } => {
                let count = text.chars().count();
                match position {
                    _ if count == 0 => Ok(()),
                    Some(position) => {
                        let to = position.checked_add(count - 1).ok_or(IndexOutOfRange {
                            from: *position,
                            to: usize::MAX,
                            len: document.len(),
                        })?;
                        document.remove_range(*position, to).map(drop)
                    }
                    None => document.remove_tail(count).map(drop),
                }
            }
            // Restored cells come back unstyled
            Operation::Delete {
                from, removed_text, ..
            } => document.insert(removed_text, Some(*from)),
        }
    }

    // ========================================================================
    // Rendering and persistence
    // ========================================================================

    /// Render with the configured markers
    pub fn render(&self) -> String {
        self.render_with(self.options.markers.markers())
    }

    pub fn render_with(&self, markers: &dyn StyleMarkers) -> String {
        render::render(&self.state.document, markers)
    }

    /// Drop the document and all history, then persist the empty state
    pub fn reset(&mut self) {
        self.state = EditorState::default();
        self.state.history.set_max_size(self.options.history_limit);
        tracing::info!("Editor state reset");
        self.persist();
    }

    /// Save a snapshot now, regardless of `autosave`
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.store.save(&self.state)?;
        self.last_save_error = None;
        Ok(())
    }

    fn persist(&mut self) {
        if !self.options.autosave {
            return;
        }
        // The in-memory edit stands even if the snapshot could not be written
        if let Err(e) = self.flush() {
            tracing::warn!("Failed to save snapshot: {}", e);
            self.last_save_error = Some(e);
        }
    }
}
