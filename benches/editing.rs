//! Benchmarks for document mutations, undo/redo and rendering
//!
//! Run with: cargo bench editing

use stylebuf::render::{render, AnsiMarkers};
use stylebuf::{Document, Editor, EditorOptions, EditorState, HistoryStack, MemorySnapshotStore};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn editor_with(text: &str) -> Editor {
    let state = EditorState {
        document: Document::with_text(text),
        history: HistoryStack::new(),
    };
    let options = EditorOptions {
        autosave: false,
        ..EditorOptions::default()
    };
    Editor::with_state(state, Box::new(MemorySnapshotStore::new()), options)
}

// ============================================================================
// Document operations
// ============================================================================

#[divan::bench(args = [1_000, 100_000])]
fn insert_middle(bencher: divan::Bencher, len: usize) {
    let text = "a".repeat(len);
    bencher
        .with_inputs(|| Document::with_text(&text))
        .bench_local_values(|mut doc| {
            doc.insert(divan::black_box("inserted text"), Some(len / 2))
                .unwrap();
            doc
        });
}

#[divan::bench(args = [1_000, 100_000])]
fn remove_middle(bencher: divan::Bencher, len: usize) {
    let text = "a".repeat(len);
    bencher
        .with_inputs(|| Document::with_text(&text))
        .bench_local_values(|mut doc| {
            let removed = doc.remove_range(len / 2, len / 2 + 99).unwrap();
            (doc, removed)
        });
}

// ============================================================================
// Undo / redo
// ============================================================================

#[divan::bench]
fn undo_redo_cycle_100_edits(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| {
            let mut editor = editor_with(&"foo bar baz ".repeat(100));
            for i in 0..100 {
                editor.add_at("x", i * 3).unwrap();
                editor.bold(i, i + 5).unwrap();
            }
            editor
        })
        .bench_local_values(|mut editor| {
            while editor.undo() {}
            while editor.redo().unwrap() {}
            editor
        });
}

// ============================================================================
// Rendering
// ============================================================================

#[divan::bench]
fn render_styled_10k(bencher: divan::Bencher) {
    let mut doc = Document::with_text(&"styled ".repeat(1_500));
    for start in (0..doc.len() - 10).step_by(20) {
        doc.set_style(stylebuf::StyleKind::Bold, start, start + 5, true)
            .unwrap();
        doc.set_style(stylebuf::StyleKind::Underline, start + 3, start + 9, true)
            .unwrap();
    }
    bencher.bench_local(|| render(divan::black_box(&doc), &AnsiMarkers));
}
