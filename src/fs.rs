//! File-system helpers for pre-run cleanup of test outputs.
use std::path::{Component, Path};

use crate::error::DiffError;

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Returns `true` if something was removed, `false` if `path` did not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<bool, DiffError> {
    if path.symlink_metadata().is_err() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|source| DiffError::Delete {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}

/// Delete each of `files` (relative to `test_dir`) and then prune the
/// directories they lived in if those are left empty.
///
/// Missing files are skipped. Directories are only removed when empty and
/// never above `test_dir`: entries that are not plain relative paths
/// (absolute, or containing `.` or `..`) are deleted but their directories
/// are not pruned. A directory that cannot be
/// removed is left alone.
///
/// Returns the number of files actually removed.
///
/// # Errors
///
/// Returns an error if an existing file cannot be removed.
pub fn delete_files_and_folders<P: AsRef<Path>>(
    test_dir: &Path,
    files: &[P],
) -> Result<usize, DiffError> {
    let mut removed = 0;
    for file in files {
        let full = test_dir.join(file);
        if remove_existing(&full)? {
            tracing::debug!("removed {}", full.display());
            removed += 1;
        }
    }

    for file in files.iter().map(AsRef::<Path>::as_ref).filter(|f| stays_inside(f)) {
        let mut dir = file.parent();
        while let Some(rel) = dir.filter(|d| !d.as_os_str().is_empty()) {
            if std::fs::remove_dir(test_dir.join(rel)).is_err() {
                break;
            }
            dir = rel.parent();
        }
    }
    Ok(removed)
}

fn stays_inside(rel: &Path) -> bool {
    rel.components().all(|c| matches!(c, Component::Normal(_)))
}
