//! Command-line argument parsing for the stylebuf driver
//!
//! Each invocation loads the snapshot, applies one command, and prints the
//! document afterwards.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::EditorConfig;
use crate::render::MarkerStyle;

/// A styled text buffer with undo/redo
#[derive(Parser, Debug)]
#[command(name = "stylebuf", version, about = "A styled text buffer with undo/redo")]
pub struct CliArgs {
    /// Snapshot file to load and save (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Style markers used when printing
    #[arg(long, value_enum, global = true)]
    pub markers: Option<MarkerStyle>,

    /// Do not write the snapshot back
    #[arg(long, global = true)]
    pub no_save: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert text at the end, or at a position with --at
    Add {
        text: String,
        #[arg(long, value_name = "N")]
        at: Option<usize>,
    },
    /// Remove the inclusive range FROM..=TO
    Remove { from: usize, to: usize },
    /// Make the inclusive range bold
    Bold { from: usize, to: usize },
    /// Make the inclusive range italic
    Italic { from: usize, to: usize },
    /// Underline the inclusive range
    Underline { from: usize, to: usize },
    /// Undo the last edit
    Undo,
    /// Redo the last undone edit
    Redo,
    /// Print the document
    Print,
    /// Discard the document and all history
    Reset,
    /// Run a sample session without touching the snapshot
    Demo,
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if let Some(path) = &self.snapshot {
            config.snapshot_path = Some(path.clone());
        }
        if let Some(markers) = self.markers {
            config.markers = markers;
        }
        if self.no_save {
            config.autosave = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("stylebuf").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_add_without_position() {
        let args = parse(&["add", "hello world"]);
        assert_eq!(
            args.command,
            Command::Add {
                text: "hello world".to_string(),
                at: None
            }
        );
    }

    #[test]
    fn test_add_with_position() {
        let args = parse(&["add", " BLA ", "--at", "4"]);
        assert_eq!(
            args.command,
            Command::Add {
                text: " BLA ".to_string(),
                at: Some(4)
            }
        );
    }

    #[test]
    fn test_range_commands() {
        assert_eq!(
            parse(&["underline", "2", "3"]).command,
            Command::Underline { from: 2, to: 3 }
        );
        assert_eq!(
            parse(&["remove", "6", "8"]).command,
            Command::Remove { from: 6, to: 8 }
        );
    }

    #[test]
    fn test_negative_index_rejected() {
        let result = CliArgs::try_parse_from(["stylebuf", "remove", "-1", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["print", "--markers", "plain", "--snapshot", "s.json"]);
        assert_eq!(args.markers, Some(MarkerStyle::Plain));
        assert_eq!(args.snapshot, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn test_overrides_applied_to_config() {
        let args = parse(&["--no-save", "--markers", "html", "undo"]);
        let mut config = EditorConfig::default();
        args.apply_to(&mut config);

        assert!(!config.autosave);
        assert_eq!(config.markers, MarkerStyle::Html);
        assert_eq!(config.snapshot_path, None);
    }
}
