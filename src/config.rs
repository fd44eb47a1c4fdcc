//! Editor configuration
//!
//! Stores user preferences in `~/.config/stylebuf/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::EditorOptions;
use crate::render::MarkerStyle;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snapshot file; `~/.config/stylebuf/editor_metadata.json` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
    /// Style markers used when printing the document
    pub markers: MarkerStyle,
    /// Save the snapshot after every mutation
    pub autosave: bool,
    /// Discard redo history when a new edit is made
    pub clear_redo_on_edit: bool,
    /// Maximum number of undo entries kept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            markers: MarkerStyle::Ansi,
            autosave: true,
            clear_redo_on_edit: false,
            history_limit: None,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolved snapshot location
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.snapshot_path
            .clone()
            .or_else(crate::config_paths::snapshot_file)
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            autosave: self.autosave,
            clear_redo_on_edit: self.clear_redo_on_edit,
            history_limit: self.history_limit,
            markers: self.markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_legacy_behaviour() {
        let config = EditorConfig::default();
        assert!(config.autosave);
        assert!(!config.clear_redo_on_edit);
        assert_eq!(config.markers, MarkerStyle::Ansi);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("markers: html\n").unwrap();
        assert_eq!(config.markers, MarkerStyle::Html);
        assert!(config.autosave);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("config.yaml"));
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_invalid_yaml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "markers: [unclosed").unwrap();
        assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
    }

    #[test]
    fn test_explicit_snapshot_path_wins() {
        let config = EditorConfig {
            snapshot_path: Some(PathBuf::from("state.json")),
            ..EditorConfig::default()
        };
        assert_eq!(config.snapshot_path(), Some(PathBuf::from("state.json")));
    }

    #[test]
    fn test_editor_options_mirror_config() {
        let config = EditorConfig {
            autosave: false,
            history_limit: Some(5),
            ..EditorConfig::default()
        };
        let options = config.editor_options();
        assert!(!options.autosave);
        assert_eq!(options.history_limit, Some(5));
    }
}
