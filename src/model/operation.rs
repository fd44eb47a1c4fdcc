//! Operation records for undo/redo

use serde::{Deserialize, Serialize};

use super::cell::StyleKind;

/// A single reversible mutation, carrying exactly what is needed to invert it.
///
/// Operations are value records; they are never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Text inserted at `position`, or appended at the end when `None`
    Insert {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
    },
    /// Inclusive range `[from, to]` removed; `removed_text` holds the
    /// characters only, not their style flags
    Delete {
        from: usize,
        to: usize,
        removed_text: String,
    },
    /// One style flag switched on for `[from, to]`
    StyleChange {
        kind: StyleKind,
        from: usize,
        to: usize,
    },
}

impl Operation {
    pub fn insert(text: impl Into<String>, position: Option<usize>) -> Self {
        Self::Insert {
            text: text.into(),
            position,
        }
    }

    pub fn delete(from: usize, to: usize, removed_text: impl Into<String>) -> Self {
        Self::Delete {
            from,
            to,
            removed_text: removed_text.into(),
        }
    }

    pub fn style_change(kind: StyleKind, from: usize, to: usize) -> Self {
        Self::StyleChange { kind, from, to }
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Delete { .. } => "delete",
            Self::StyleChange { kind, .. } => kind.name(),
        }
    }

    /// Number of characters this operation adds to (positive) or removes
    /// from (negative) the document
    pub fn length_delta(&self) -> isize {
        match self {
            Self::Insert { text, .. } => text.chars().count() as isize,
            Self::Delete { removed_text, .. } => -(removed_text.chars().count() as isize),
            Self::StyleChange { .. } => 0,
        }
    }
}
