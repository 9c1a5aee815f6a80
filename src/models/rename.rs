use std::fmt;
use std::path::{Path, PathBuf};

/// Old and new filename computed for one index of the PNG subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePair {
    /// Zero-based position in the PNG subset
    pub index: usize,
    /// Filename expected to exist before the move
    pub source: String,
    /// Filename the snapshot ends up with
    pub destination: String,
}

impl RenamePair {
    pub fn source_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.source)
    }

    pub fn destination_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.destination)
    }
}

impl fmt::Display for RenamePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Everything computed before any file is touched
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    /// PNG entries found in the directory, sorted by name
    pub png_files: Vec<String>,
    /// One pair per PNG entry, in index order
    pub pairs: Vec<RenamePair>,
}

impl RenamePlan {
    /// Number of PNG entries, the value printed before renaming
    pub fn png_count(&self) -> usize {
        self.png_files.len()
    }
}

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    pub png_count: usize,
    pub renamed: usize,
}
