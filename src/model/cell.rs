//! Cell - a single styled character in the document

use serde::{Deserialize, Serialize};

/// One of the three independent style flags a cell can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Bold,
    Italic,
    Underline,
}

impl StyleKind {
    /// Fixed wrapping order used when rendering (innermost first)
    pub const ALL: [StyleKind; 3] = [StyleKind::Bold, StyleKind::Italic, StyleKind::Underline];

    pub fn name(self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Italic => "italic",
            StyleKind::Underline => "underline",
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A character plus its style flags.
///
/// The character is fixed for the lifetime of the cell; only the flags
/// change in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    value: char,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl Cell {
    /// Create an unstyled cell
    pub fn new(value: char) -> Self {
        Self {
            value,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn value(&self) -> char {
        self.value
    }

    /// Read a single style flag
    pub fn style(&self, kind: StyleKind) -> bool {
        match kind {
            StyleKind::Bold => self.bold,
            StyleKind::Italic => self.italic,
            StyleKind::Underline => self.underline,
        }
    }

    /// Set a single style flag
    pub fn set_style(&mut self, kind: StyleKind, value: bool) {
        match kind {
            StyleKind::Bold => self.bold = value,
            StyleKind::Italic => self.italic = value,
            StyleKind::Underline => self.underline = value,
        }
    }

    /// True if no style flag is set
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.underline)
    }
}

impl From<char> for Cell {
    fn from(value: char) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_plain() {
        let cell = Cell::new('a');
        assert_eq!(cell.value(), 'a');
        assert!(cell.is_plain());
    }

    #[test]
    fn test_set_style_is_independent_per_flag() {
        let mut cell = Cell::new('x');
        cell.set_style(StyleKind::Italic, true);

        assert!(cell.style(StyleKind::Italic));
        assert!(!cell.style(StyleKind::Bold));
        assert!(!cell.style(StyleKind::Underline));

        cell.set_style(StyleKind::Italic, false);
        assert!(cell.is_plain());
    }

    #[test]
    fn test_style_kind_serializes_lowercase() {
        let json = serde_json::to_string(&StyleKind::Underline).unwrap();
        assert_eq!(json, "\"underline\"");
    }

    #[test]
    fn test_cell_missing_flags_default_to_false() {
        let cell: Cell = serde_json::from_str(r#"{"value":"q"}"#).unwrap();
        assert_eq!(cell, Cell::new('q'));
    }
}
