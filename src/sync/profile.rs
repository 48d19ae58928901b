//! Profile discovery and resolution
//!
//! A profile is a directory under the profiles root holding any of
//! `commands/`, `rules/` and `AGENTS.md`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::SyncError;

/// Subdirectory holding command templates
pub const COMMANDS_DIR: &str = "commands";
/// Subdirectory holding rule files
pub const RULES_DIR: &str = "rules";
/// Top-level agent documentation file
pub const AGENTS_MD: &str = "AGENTS.md";

/// A resolved, existing profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    dir: PathBuf,
}

impl Profile {
    /// Profile name as given on the command line
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Profile directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<profile>/commands`
    #[must_use]
    pub fn commands_dir(&self) -> PathBuf {
        self.dir.join(COMMANDS_DIR)
    }

    /// `<profile>/rules`
    #[must_use]
    pub fn rules_dir(&self) -> PathBuf {
        self.dir.join(RULES_DIR)
    }

    /// `<profile>/AGENTS.md`
    #[must_use]
    pub fn agents_md(&self) -> PathBuf {
        self.dir.join(AGENTS_MD)
    }
}

/// The directory all profiles live in
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Create a store rooted at a profiles directory
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Profiles root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all profiles (non-hidden subdirectories), sorted.
    ///
    /// A missing or unreadable profiles root yields an empty list.
    #[must_use]
    pub fn available(&self) -> Vec<String> {
        let Ok(read_dir) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut names: Vec<String> = read_dir
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .collect();
        names.sort();
        names
    }

    /// Resolve a profile by name.
    ///
    /// Fails with [`SyncError::ProfileNotFound`], carrying the available
    /// names, when no such directory exists.
    pub fn resolve(&self, name: &str) -> Result<Profile, SyncError> {
        let dir = self.root.join(name);
        if is_plain_name(name) && dir.is_dir() {
            return Ok(Profile {
                name: name.to_string(),
                dir,
            });
        }

        Err(SyncError::ProfileNotFound {
            name: name.to_string(),
            available: self.available(),
        })
    }
}

/// A profile name must be exactly one normal path component
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    )
}
