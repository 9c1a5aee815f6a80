//! Snapshot renaming

pub mod processor;

pub use processor::{plan, rename_snapshots};
