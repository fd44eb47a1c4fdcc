//! Rendering documents to display strings
//!
//! Every character is wrapped individually in the markers of its enabled
//! style flags. Bold is the innermost wrapper, then italic, then underline,
//! so a bold+underlined `a` renders as `U(B(a))`.
//!
//! The markers themselves are pluggable: ANSI escapes for terminals, no
//! markers at all for plain text, or HTML tags.

use serde::{Deserialize, Serialize};

use crate::model::{Cell, Document, StyleKind};

/// Opening and closing markers for each style flag
pub trait StyleMarkers {
    fn open(&self, kind: StyleKind) -> &str;
    fn close(&self, kind: StyleKind) -> &str;
}

/// SGR escape sequences, each closed with a full reset
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiMarkers;

impl StyleMarkers for AnsiMarkers {
    fn open(&self, kind: StyleKind) -> &str {
        match kind {
            StyleKind::Bold => "\x1b[1m",
            StyleKind::Italic => "\x1b[3m",
            StyleKind::Underline => "\x1b[4m",
        }
    }

    fn close(&self, _kind: StyleKind) -> &str {
        "\x1b[0m"
    }
}

/// No markers; renders the bare text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainMarkers;

impl StyleMarkers for PlainMarkers {
    fn open(&self, _kind: StyleKind) -> &str {
        ""
    }

    fn close(&self, _kind: StyleKind) -> &str {
        ""
    }
}

/// `<b>`, `<i>` and `<u>` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkers;

impl StyleMarkers for HtmlMarkers {
    fn open(&self, kind: StyleKind) -> &str {
        match kind {
            StyleKind::Bold => "<b>",
            StyleKind::Italic => "<i>",
            StyleKind::Underline => "<u>",
        }
    }

    fn close(&self, kind: StyleKind) -> &str {
        match kind {
            StyleKind::Bold => "</b>",
            StyleKind::Italic => "</i>",
            StyleKind::Underline => "</u>",
        }
    }
}

/// Marker strategy selectable from config and the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Ansi,
    Plain,
    Html,
}

impl MarkerStyle {
    pub fn markers(self) -> &'static dyn StyleMarkers {
        match self {
            MarkerStyle::Ansi => &AnsiMarkers,
            MarkerStyle::Plain => &PlainMarkers,
            MarkerStyle::Html => &HtmlMarkers,
        }
    }
}

/// Render a whole document
pub fn render(document: &Document, markers: &dyn StyleMarkers) -> String {
    let mut out = String::with_capacity(document.len());
    for cell in document.cells() {
        render_cell(&mut out, cell, markers);
    }
    out
}

fn render_cell(out: &mut String, cell: &Cell, markers: &dyn StyleMarkers) {
    // Outermost wrapper opens first
    for kind in StyleKind::ALL.iter().rev() {
        if cell.style(*kind) {
            out.push_str(markers.open(*kind));
        }
    }
    out.push(cell.value());
    for kind in StyleKind::ALL {
        if cell.style(kind) {
            out.push_str(markers.close(kind));
        }
    }
}
