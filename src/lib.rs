//! Snapshot renamer
//!
//! Renames the PNG snapshots written by the frame extraction tests into a
//! sequential `framefusion000.png`, `framefusion001.png`, ... pattern.

pub mod error;
pub mod models;
pub mod renamer;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Config, RenamePair, RenamePlan, RenameSummary, SNAPSHOT_DIR};
pub use renamer::{plan, rename_snapshots};
