//! Where stylebuf keeps its files between runs
//!
//! One directory holds the YAML config, the JSON snapshot of the document and
//! its history, and a `logs/` subdirectory. It is `$XDG_CONFIG_HOME/stylebuf`
//! or `~/.config/stylebuf` on Unix and `%APPDATA%\stylebuf` on Windows.

use std::{env, io, path::PathBuf};

const APP_DIR: &str = "stylebuf";

const CONFIG_FILE: &str = "config.yaml";
const SNAPSHOT_FILE: &str = "editor_metadata.json";
const LOGS_DIR: &str = "logs";

/// Directory holding config, snapshot and logs. `None` without a home directory.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Default snapshot location, overridden by `snapshot_path` in the config
/// or `--snapshot` on the command line
pub fn snapshot_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SNAPSHOT_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home or config directory")
    })?;
    std::fs::create_dir_all(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_share_one_directory() {
        let (Some(dir), Some(config), Some(snapshot), Some(logs)) =
            (config_dir(), config_file(), snapshot_file(), logs_dir())
        else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config.parent(), Some(dir.as_path()));
        assert_eq!(snapshot.file_name().unwrap(), SNAPSHOT_FILE);
        assert_eq!(snapshot.parent(), Some(dir.as_path()));
        assert_eq!(logs, dir.join(LOGS_DIR));
    }
}
