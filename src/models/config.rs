use std::path::{Path, PathBuf};

/// Folder holding the snapshots written by the frame extraction test suite
pub const SNAPSHOT_DIR: &str = "test/__image_snapshots__";

/// Configuration for a rename run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose snapshots get renamed in place
    pub directory: PathBuf,
}

impl Config {
    /// Create a configuration operating on an arbitrary directory
    pub fn for_directory(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_directory(SNAPSHOT_DIR)
    }
}
