//! Timestamped backup snapshot
//!
//! The snapshot directory name is fixed when the run starts, but the
//! directory itself is only created the first time something is backed up.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Name prefix of snapshot directories inside the target root
pub const BACKUP_PREFIX: &str = ".cursor-backup-";

/// Format a timestamp as `YYYY-MM-DDTHH-MM-SS` (UTC, sortable, path-safe)
#[must_use]
pub fn timestamp_label(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// A lazily created `.cursor-backup-<timestamp>` directory
#[derive(Debug, Clone)]
pub struct BackupSnapshot {
    dir: PathBuf,
    created: bool,
}

impl BackupSnapshot {
    /// Plan a snapshot under `target_root` for the given time
    #[must_use]
    pub fn new(target_root: &Path, at: DateTime<Utc>) -> Self {
        Self {
            dir: target_root.join(format!("{BACKUP_PREFIX}{}", timestamp_label(at))),
            created: false,
        }
    }

    /// Snapshot directory path, whether or not it exists yet
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the snapshot directory on first call; later calls are no-ops
    pub fn ensure_created(&mut self) -> Result<&Path> {
        if !self.created {
            fs::create_dir_all(&self.dir).with_context(|| {
                format!("Failed to create backup directory: {}", self.dir.display())
            })?;
            self.created = true;
        }
        Ok(&self.dir)
    }

    /// The snapshot directory, if this run created it
    #[must_use]
    pub fn created_dir(&self) -> Option<&Path> {
        self.created.then_some(self.dir.as_path())
    }
}
