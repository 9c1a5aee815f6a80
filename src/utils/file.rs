use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;
use crate::error::Result;

/// List the entry names of a directory, sorted by name
pub fn list_entries(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

/// Move a file, overwriting any existing destination.
///
/// Tries a plain rename first. A missing source is reported as is; any other
/// rename failure falls back to copy+delete, and a failed delete is an error.
pub fn safe_move_file(src: &Path, dest: &Path) -> Result<()> {
    match fs::rename(src, dest) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(e.into()),
        Err(e) => {
            warn!(
                "Rename failed for {}, trying copy+delete: {}",
                src.display(),
                e
            );

            fs::copy(src, dest)?;
            fs::remove_file(src)?;
            Ok(())
        }
    }
}
