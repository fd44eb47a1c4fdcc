//! Snapshot persistence for the editor state
//!
//! The whole [`EditorState`] (document plus both history stacks) is written
//! as one JSON file after every mutation. Loading happens once at startup.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::EditorState;

/// Errors that make an existing snapshot unusable.
///
/// These are fatal at startup: guessing the document state would be worse
/// than refusing to start.
#[derive(Debug, Clone)]
pub enum SnapshotLoadError {
    IoError(String),
    ParseError(String),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for SnapshotLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotLoadError::IoError(e) => write!(f, "IO error: {}", e),
            SnapshotLoadError::ParseError(e) => write!(f, "Parse error: {}", e),
            SnapshotLoadError::UnsupportedVersion(v) => {
                write!(
                    f,
                    "Unsupported snapshot version {} (newest known is {})",
                    v,
                    SnapshotFile::CURRENT_VERSION
                )
            }
        }
    }
}

impl std::error::Error for SnapshotLoadError {}

/// Where the editor state lives between runs
pub trait SnapshotStore {
    /// Load the stored state, `None` if nothing has been stored yet
    fn load(&self) -> Result<Option<EditorState>, SnapshotLoadError>;

    /// Overwrite the stored state
    fn save(&self, state: &EditorState) -> std::io::Result<()>;
}

/// On-disk envelope around the state
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotFile {
    /// Schema version for forward compatibility
    #[serde(default)]
    version: u32,
    #[serde(flatten)]
    state: EditorState,
}

impl SnapshotFile {
    const CURRENT_VERSION: u32 = 1;
}

/// JSON snapshot in a single file
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is written to before it replaces the real one
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<EditorState>, SnapshotLoadError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}, starting empty", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(SnapshotLoadError::IoError(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        // A zero-length file is what a first run leaves behind before any edit
        if contents.trim().is_empty() {
            return Ok(None);
        }

        let file: SnapshotFile = serde_json::from_str(&contents).map_err(|e| {
            SnapshotLoadError::ParseError(format!("{}: {}", self.path.display(), e))
        })?;
        if file.version > SnapshotFile::CURRENT_VERSION {
            return Err(SnapshotLoadError::UnsupportedVersion(file.version));
        }

        tracing::info!(
            "Loaded snapshot from {} ({} chars, {} undo, {} redo)",
            self.path.display(),
            file.state.document.len(),
            file.state.history.undo_count(),
            file.state.history.redo_count()
        );
        Ok(Some(file.state))
    }

    fn save(&self, state: &EditorState) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = SnapshotFile {
            version: SnapshotFile::CURRENT_VERSION,
            state: state.clone(),
        };
        let contents = serde_json::to_string_pretty(&file)?;

        // Readers only ever see the old snapshot or the complete new one
        let staging = self.staging_path();
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)
    }
}

/// Keeps the last saved state in memory. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    saved: RefCell<Option<EditorState>>,
    saves: RefCell<usize>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved state
    pub fn saved(&self) -> Option<EditorState> {
        self.saved.borrow().clone()
    }

    /// How many times `save` has been called
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<EditorState>, SnapshotLoadError> {
        Ok(self.saved.borrow().clone())
    }

    fn save(&self, state: &EditorState) -> std::io::Result<()> {
        *self.saved.borrow_mut() = Some(state.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for std::rc::Rc<S> {
    fn load(&self) -> Result<Option<EditorState>, SnapshotLoadError> {
        (**self).load()
    }

    fn save(&self, state: &EditorState) -> std::io::Result<()> {
        (**self).save(state)
    }
}
