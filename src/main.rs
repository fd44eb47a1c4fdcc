use anyhow::{Context, Result};
use clap::Parser;

use stylebuf::cli::{CliArgs, Command};
use stylebuf::{Editor, EditorConfig, EditorOptions, EditorState, FileSnapshotStore};
use stylebuf::{MarkerStyle, MemorySnapshotStore};

fn main() -> Result<()> {
    stylebuf::tracing::init();

    let args = CliArgs::parse();
    let mut config = EditorConfig::load();
    args.apply_to(&mut config);

    if args.command == Command::Demo {
        return run_demo(config.markers);
    }

    let path = config
        .snapshot_path()
        .context("No config directory available, pass --snapshot")?;
    let store = FileSnapshotStore::new(&path);
    let mut editor = Editor::open(Box::new(store), config.editor_options())
        .with_context(|| format!("Cannot start from snapshot {}", path.display()))?;

    run_command(&mut editor, &args.command)?;
    println!("{}", editor.render());

    if let Some(e) = editor.last_save_error() {
        eprintln!("Warning: changes were not saved to {}: {}", path.display(), e);
    }
    Ok(())
}

fn run_command(editor: &mut Editor, command: &Command) -> Result<()> {
    match command {
        Command::Add { text, at: None } => editor.add(text)?,
        Command::Add { text, at: Some(at) } => editor.add_at(text, *at)?,
        Command::Remove { from, to } => editor.remove(*from, *to)?,
        Command::Bold { from, to } => editor.bold(*from, *to)?,
        Command::Italic { from, to } => editor.italic(*from, *to)?,
        Command::Underline { from, to } => editor.underline(*from, *to)?,
        Command::Undo => {
            if !editor.undo() {
                eprintln!("Nothing to undo");
            }
        }
        Command::Redo => {
            if !editor.redo()? {
                eprintln!("Nothing to redo");
            }
        }
        Command::Reset => editor.reset(),
        // Demo is dispatched before any snapshot is opened
        Command::Print | Command::Demo => {}
    }
    Ok(())
}

/// Sample session against an in-memory store, printing along the way
fn run_demo(markers: MarkerStyle) -> Result<()> {
    let options = EditorOptions {
        markers,
        ..EditorOptions::default()
    };
    let mut editor = Editor::with_state(
        EditorState::default(),
        Box::new(MemorySnapshotStore::new()),
        options,
    );

    editor.add("test test")?;
    editor.add(" another value")?;
    println!("{}", editor.render());
    editor.undo();
    println!("{}", editor.render());
    editor.redo()?;
    editor.underline(2, 3)?;
    editor.add_at(" BLA ", 4)?;
    println!("{}", editor.render());
    editor.underline(0, 4)?;
    editor.bold(1, 2)?;
    editor.remove(6, 8)?;
    println!("{}", editor.render());
    Ok(())
}
