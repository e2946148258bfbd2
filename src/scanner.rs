use crate::error::Error;
use crate::model::TimestampedFile;
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Non-recursive directory scan. Lists the direct entries of `dir`, keeps
/// regular files (symlinks are followed, so a symlink to a file counts),
/// and records each file's creation timestamp.
///
/// An unreadable directory fails the whole scan with
/// [`Error::DirectoryAccess`]. A metadata failure on a single entry (for
/// example a file deleted between listing and stat) only skips that entry.
/// Entry order is whatever the directory listing produced; ordering is
/// established later by the planner.
pub fn scan_directory(dir: &Path, ignore_globs: &[String]) -> Result<Vec<TimestampedFile>, Error> {
    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let entries = fs::read_dir(dir).map_err(|source| Error::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };

        let path = entry.path();
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!("Skipping {}: {}", path.display(), err);
                continue;
            }
        };

        if !metadata.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if ignore_patterns.iter().any(|pattern| pattern.matches(&name)) {
            debug!("Ignoring {} (matched ignore pattern)", name);
            continue;
        }

        // Not every filesystem reports birth time; last-modification time
        // is the closest stand-in when it doesn't.
        let created = match metadata.created().or_else(|_| metadata.modified()) {
            Ok(time) => time,
            Err(err) => {
                debug!("Skipping {}: no usable timestamp ({})", path.display(), err);
                continue;
            }
        };

        files.push(TimestampedFile { name, created });
    }

    Ok(files)
}
