//! Filesystem helpers: recursive copy and visible-entry listing
//!
//! An entry is "visible" when its name does not start with `.`. Visibility
//! only decides whether a directory counts as empty; copies take every entry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Names of the visible top-level entries of `dir`, sorted.
///
/// An unreadable or missing directory yields an empty list.
#[must_use]
pub fn visible_entries(dir: &Path) -> Vec<String> {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = read_dir
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    names
}

/// True if `dir` exists and has at least one visible entry
#[must_use]
pub fn has_visible_entries(dir: &Path) -> bool {
    dir.exists() && !visible_entries(dir).is_empty()
}

/// Recursively copy the contents of `src` into `dest`.
///
/// `dest` and any missing parents are created. Existing files at the same
/// relative path are overwritten; files only present in `dest` are left
/// alone. Directory symlinks are not followed, so the walk cannot cycle.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

    let mut entries = fs::read_dir(src)
        .with_context(|| format!("Failed to read directory: {}", src.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read directory: {}", src.display()))?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", src_path.display()))?;

        if file_type.is_dir() {
            copy_tree(&src_path, &dest_path)?;
        } else {
            copy_file(&src_path, &dest_path)?;
        }
    }

    Ok(())
}

/// Copy a single file, overwriting `dest`
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            src.display(),
            dest.display()
        )
    })?;
    Ok(())
}
