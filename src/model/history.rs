//! Undo/redo history stacks

use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// Undo and redo stacks of operations, both LIFO.
///
/// Pushing a new operation leaves the redo stack alone; callers that want
/// the usual "new edit discards redo" behaviour call [`clear_redo`].
///
/// [`clear_redo`]: HistoryStack::clear_redo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    undo: Vec<Operation>,
    redo: Vec<Operation>,
    #[serde(skip)]
    max_size: Option<usize>,
}

impl HistoryStack {
    /// Create an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_size` undo entries
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..Self::default()
        }
    }

    /// Change the undo limit, trimming the oldest entries if needed
    pub fn set_max_size(&mut self, max_size: Option<usize>) {
        self.max_size = max_size;
        self.trim();
    }

    /// Push an operation onto the undo stack
    pub fn push(&mut self, op: Operation) {
        self.undo.push(op);
        self.trim();
    }

    /// Pop the newest undo entry. Once it has been reversed, the caller
    /// hands it back through [`push_redo`].
    ///
    /// [`push_redo`]: HistoryStack::push_redo
    pub fn pop_undo(&mut self) -> Option<Operation> {
        self.undo.pop()
    }

    /// Push a reversed operation onto the redo stack
    pub fn push_redo(&mut self, op: Operation) {
        self.redo.push(op);
    }

    /// Pop the newest redo entry. The caller re-applies it, which pushes a
    /// fresh operation onto the undo stack.
    pub fn pop_redo(&mut self) -> Option<Operation> {
        self.redo.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    /// Undo entries, oldest first
    pub fn undo_ops(&self) -> &[Operation] {
        &self.undo
    }

    /// Redo entries, oldest first
    pub fn redo_ops(&self) -> &[Operation] {
        &self.redo
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    fn trim(&mut self) {
        if let Some(max) = self.max_size {
            if self.undo.len() > max {
                let excess = self.undo.len() - max;
                self.undo.drain(..excess);
            }
        }
    }
}
