//! Target project resolution

use std::path::{Component, Path, PathBuf};

use crate::error::SyncError;
use crate::sync::profile::{AGENTS_MD, COMMANDS_DIR, RULES_DIR};

/// Directory Cursor reads project configuration from
pub const CURSOR_DIR: &str = ".cursor";

/// An existing target project directory, as an absolute path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    root: PathBuf,
}

impl Target {
    /// Resolve a user-supplied path against the current directory.
    ///
    /// `~` is expanded to the home directory. Fails with
    /// [`SyncError::TargetNotFound`] if the result is not a directory.
    pub fn resolve<P: AsRef<Path>>(raw: P) -> Result<Self, SyncError> {
        let cwd = std::env::current_dir()?;
        Self::resolve_from(&cwd, raw.as_ref(), dirs::home_dir().as_deref())
    }

    /// Like [`Target::resolve`] with an explicit base and home directory.
    pub fn resolve_from(base: &Path, raw: &Path, home: Option<&Path>) -> Result<Self, SyncError> {
        let expanded = expand_tilde(raw, home);
        let root = normalize(&base.join(expanded));
        if !root.is_dir() {
            return Err(SyncError::TargetNotFound { path: root });
        }
        Ok(Self { root })
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<target>/.cursor`
    #[must_use]
    pub fn cursor_dir(&self) -> PathBuf {
        self.root.join(CURSOR_DIR)
    }

    /// `<target>/.cursor/commands`
    #[must_use]
    pub fn commands_dir(&self) -> PathBuf {
        self.cursor_dir().join(COMMANDS_DIR)
    }

    /// `<target>/.cursor/rules`
    #[must_use]
    pub fn rules_dir(&self) -> PathBuf {
        self.cursor_dir().join(RULES_DIR)
    }

    /// `<target>/AGENTS.md`
    #[must_use]
    pub fn agents_md(&self) -> PathBuf {
        self.root.join(AGENTS_MD)
    }
}

/// Replace a leading `~` component with `home`. Other paths pass through.
fn expand_tilde(raw: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return raw.to_path_buf();
    };
    match raw.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => raw.to_path_buf(),
    }
}

/// Lexically drop `.` and resolve `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
