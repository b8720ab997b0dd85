//! Cross-platform storage location using the `dirs` crate.
//!
//! Layout:
//!
//!   Windows: %APPDATA%\avatar-session-config\avatar-session-config.json
//!   macOS:   ~/Library/Application Support/avatar-session-config/avatar-session-config.json
//!   Linux:   ~/.config/avatar-session-config/avatar-session-config.json

use std::path::PathBuf;

use crate::persist::STORAGE_KEY;

/// Holds the resolved directory for persisted snapshots.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    /// Directory that [`crate::persist::FileStorage`] writes into.
    pub config_dir: PathBuf,
    /// Full path of the snapshot stored under [`STORAGE_KEY`].
    pub snapshot_file: PathBuf,
}

impl StoragePaths {
    const APP_NAME: &'static str = "avatar-session-config";

    /// Resolves the platform config directory.
    ///
    /// Falls back to the current directory if the platform cannot provide a
    /// standard path.
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(Self::APP_NAME);
        Self::in_dir(config_dir)
    }

    /// Uses an explicit directory (CLI `--storage-dir`, tests).
    pub fn in_dir(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let snapshot_file = config_dir.join(format!("{STORAGE_KEY}.json"));
        Self {
            config_dir,
            snapshot_file,
        }
    }
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::new()
    }
}
