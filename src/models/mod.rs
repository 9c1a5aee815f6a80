//! Data types shared across the renamer

mod config;
mod rename;

pub use config::{Config, SNAPSHOT_DIR};
pub use rename::{RenamePair, RenamePlan, RenameSummary};
