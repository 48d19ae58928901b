//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A repository with a `profiles/` root and a separate target project,
/// both under one temporary directory.
pub struct Fixture {
    _temp_dir: TempDir,
    /// Repository root (contains `profiles/`)
    pub repo: PathBuf,
    /// Target project root
    pub target: PathBuf,
}

impl Fixture {
    /// Create an empty repository and an empty target project
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = temp_dir.path().join("repo");
        let target = temp_dir.path().join("project");
        fs::create_dir_all(repo.join("profiles")).unwrap();
        fs::create_dir_all(&target).unwrap();
        Self {
            _temp_dir: temp_dir,
            repo,
            target,
        }
    }

    /// Profiles root
    #[must_use]
    pub fn profiles_root(&self) -> PathBuf {
        self.repo.join("profiles")
    }

    /// Write a file inside a profile, e.g. `profile_file("base", "rules/a.md", ..)`
    pub fn profile_file(&self, profile: &str, rel: &str, content: &str) -> &Self {
        write_file(&self.profiles_root().join(profile).join(rel), content);
        self
    }

    /// Write a file inside the target project
    pub fn target_file(&self, rel: &str, content: &str) -> &Self {
        write_file(&self.target.join(rel), content);
        self
    }

    /// Read a file inside the target project
    #[must_use]
    pub fn read_target(&self, rel: &str) -> String {
        fs::read_to_string(self.target.join(rel)).unwrap()
    }

    /// Names of `.cursor-backup-*` directories in the target, sorted
    #[must_use]
    pub fn backup_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(&self.target)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .starts_with(".cursor-backup-")
            })
            .map(|e| e.path())
            .collect();
        dirs.sort();
        dirs
    }
}
