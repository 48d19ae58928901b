//! Repository configuration parser
//!
//! Parses the optional `cursor-sync.toml` at the repository root. A missing
//! file is not an error; every field has a default.

use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// File name looked up at the repository root
pub const CONFIG_FILE: &str = "cursor-sync.toml";

/// Defaults applied to every sync unless a flag overrides them
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DefaultOptions {
    /// Back up existing target content before overwriting (default: true)
    #[serde(default = "default_backup")]
    pub backup: bool,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            backup: default_backup(),
        }
    }
}

const fn default_backup() -> bool {
    true
}

/// Top-level repository configuration parsed from `cursor-sync.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepoConfig {
    /// Directory holding one subdirectory per profile, relative to the repo root
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,
    /// Option defaults
    #[serde(default)]
    pub defaults: DefaultOptions,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            profiles_dir: default_profiles_dir(),
            defaults: DefaultOptions::default(),
        }
    }
}

fn default_profiles_dir() -> PathBuf {
    PathBuf::from("profiles")
}

impl RepoConfig {
    /// Load `cursor-sync.toml` from a repository root, falling back to
    /// defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse cursor-sync.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Absolute profiles root for a given repository root
    #[must_use]
    pub fn profiles_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.profiles_dir)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if self.profiles_dir.as_os_str().is_empty() {
            bail!("profiles_dir cannot be empty");
        }

        // profiles_dir must stay inside the repository
        for component in self.profiles_dir.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => bail!(
                    "Invalid profiles_dir '{}': '..' is not allowed",
                    self.profiles_dir.display()
                ),
                Component::RootDir | Component::Prefix(_) => bail!(
                    "Invalid profiles_dir '{}': must be relative to the repository root",
                    self.profiles_dir.display()
                ),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = RepoConfig::parse("").unwrap();

        assert_eq!(config, RepoConfig::default());
        assert_eq!(config.profiles_dir, PathBuf::from("profiles"));
        assert!(config.defaults.backup);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = RepoConfig::parse(
            r#"
profiles_dir = "presets"

[defaults]
backup = false
"#,
        )
        .unwrap();

        assert_eq!(config.profiles_dir, PathBuf::from("presets"));
        assert!(!config.defaults.backup);
    }

    #[test]
    fn test_defaults_table_without_backup_keeps_true() {
        let config = RepoConfig::parse("[defaults]\n").unwrap();
        assert!(config.defaults.backup);
    }

    #[test]
    fn test_rejects_empty_profiles_dir() {
        let err = RepoConfig::parse(r#"profiles_dir = """#).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_rejects_parent_dir_profiles_dir() {
        let err = RepoConfig::parse(r#"profiles_dir = "../elsewhere""#).unwrap_err();
        assert!(err.to_string().contains("'..' is not allowed"));
    }

    #[test]
    fn test_rejects_absolute_profiles_dir() {
        let err = RepoConfig::parse(r#"profiles_dir = "/etc/profiles""#).unwrap_err();
        assert!(err.to_string().contains("must be relative"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = RepoConfig::parse("profiles_dir = [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse cursor-sync.toml"));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = RepoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, RepoConfig::default());
    }

    #[test]
    fn test_load_reads_file_at_repo_root() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "profiles_dir = \"bundles\"\n",
        )
        .unwrap();

        let config = RepoConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            config.profiles_root(temp_dir.path()),
            temp_dir.path().join("bundles")
        );
    }
}
