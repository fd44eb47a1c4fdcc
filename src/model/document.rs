//! Document model - the ordered sequence of styled cells

use serde::{Deserialize, Serialize};

use super::cell::{Cell, StyleKind};

/// A position or inclusive range that does not fit the document.
///
/// For insertions `from == to == position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub from: usize,
    pub to: usize,
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.from == self.to {
            write!(
                f,
                "index {} out of range for document of length {}",
                self.from, self.len
            )
        } else {
            write!(
                f,
                "range [{}, {}] out of range for document of length {}",
                self.from, self.to, self.len
            )
        }
    }
}

impl std::error::Error for IndexOutOfRange {}

/// The mutable text buffer. Each index owns exactly one cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    cells: Vec<Cell>,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unstyled document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            cells: text.chars().map(Cell::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Plain text content, style flags ignored
    pub fn text(&self) -> String {
        self.cells.iter().map(Cell::value).collect()
    }

    /// Insert `text` as unstyled cells starting at `position`, or append
    /// when `position` is `None`.
    ///
    /// `position` may equal `len()`, which is the same as appending.
    pub fn insert(&mut self, text: &str, position: Option<usize>) -> Result<(), IndexOutOfRange> {
        let at = match position {
            Some(position) if position > self.len() => {
                return Err(IndexOutOfRange {
                    from: position,
                    to: position,
                    len: self.len(),
                })
            }
            Some(position) => position,
            None => self.len(),
        };
        let tail = self.cells.split_off(at);
        self.cells.extend(text.chars().map(Cell::new));
        self.cells.extend(tail);
        Ok(())
    }

    /// Remove the inclusive range `[from, to]` and return the removed characters
    pub fn remove_range(&mut self, from: usize, to: usize) -> Result<String, IndexOutOfRange> {
        self.check_range(from, to)?;
        Ok(self.cells.drain(from..=to).map(|cell| cell.value()).collect())
    }

    /// Remove the last `count` cells, returning the removed characters
    pub fn remove_tail(&mut self, count: usize) -> Result<String, IndexOutOfRange> {
        if count == 0 {
            return Ok(String::new());
        }
        let len = self.len();
        let from = len.checked_sub(count).ok_or(IndexOutOfRange {
            from: 0,
            to: count - 1,
            len,
        })?;
        self.remove_range(from, len - 1)
    }

    /// Set one style flag to `value` on every cell in `[from, to]`
    pub fn set_style(
        &mut self,
        kind: StyleKind,
        from: usize,
        to: usize,
        value: bool,
    ) -> Result<(), IndexOutOfRange> {
        self.check_range(from, to)?;
        for cell in &mut self.cells[from..=to] {
            cell.set_style(kind, value);
        }
        Ok(())
    }

    fn check_range(&self, from: usize, to: usize) -> Result<(), IndexOutOfRange> {
        if from > to || to >= self.len() {
            return Err(IndexOutOfRange {
                from,
                to,
                len: self.len(),
            });
        }
        Ok(())
    }
}
