use std::io;
use snapshot_renamer::utils::init_logging;
use snapshot_renamer::{rename_snapshots, Config, Result};

fn main() -> Result<()> {
    init_logging();

    let config = Config::default();
    let stdout = io::stdout();
    rename_snapshots(&config, &mut stdout.lock())?;

    Ok(())
}
