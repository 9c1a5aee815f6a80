use std::io::Write;
use tracing::{debug, info, warn};
use crate::error::Result;
use crate::models::{Config, RenamePair, RenamePlan, RenameSummary};
use crate::utils::{
    destination_name,
    is_png,
    is_renamed,
    list_entries,
    safe_move_file,
    snapshot_index,
    source_name,
};

/// Select the entries that still need renaming
fn png_subset(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .filter(|name| is_png(name) && !is_renamed(name))
        .collect()
}

/// List the directory and compute every rename pair without touching a file
pub fn plan(config: &Config) -> Result<RenamePlan> {
    let entries = list_entries(&config.directory)?;
    debug!("Found {} entries in {}", entries.len(), config.directory.display());

    let png_files = png_subset(entries);
    let pairs = (0..png_files.len())
        .map(|index| RenamePair {
            index,
            source: source_name(index),
            destination: destination_name(index),
        })
        .collect();

    Ok(RenamePlan { png_files, pairs })
}

/// Rename the snapshots of `config.directory` into sequential names.
///
/// The PNG count is written to `out` before the first move. The first failed
/// move aborts the run; files renamed before it stay renamed.
pub fn rename_snapshots<W: Write>(config: &Config, out: &mut W) -> Result<RenameSummary> {
    let plan = plan(config)?;

    writeln!(out, "{}", plan.png_count())?;
    out.flush()?;

    for name in plan.png_files.iter().filter(|name| snapshot_index(name).is_none()) {
        warn!("{} does not follow the snapshot naming template", name);
    }

    let mut renamed = 0;
    for pair in &plan.pairs {
        debug!("Renaming {}", pair);
        safe_move_file(
            &pair.source_path(&config.directory),
            &pair.destination_path(&config.directory),
        )?;
        renamed += 1;
    }

    let summary = RenameSummary {
        png_count: plan.png_count(),
        renamed,
    };
    info!(
        "Renamed {} of {} snapshots in {}",
        summary.renamed,
        summary.png_count,
        config.directory.display()
    );
    Ok(summary)
}
