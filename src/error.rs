//! User-facing error taxonomy
//!
//! Operational failures (a copy that hits a permission error, a config file
//! that fails to parse) travel as `anyhow::Error` with context. The variants
//! here are the input errors the CLI reports as a single clear message.

use std::path::PathBuf;

use thiserror::Error;

/// Errors caused by what the user asked for, rather than by the filesystem
#[derive(Debug, Error)]
pub enum SyncError {
    /// The named profile has no directory under the profiles root
    #[error("Profile not found: {name}")]
    ProfileNotFound {
        /// The name that was requested
        name: String,
        /// Profiles that do exist, sorted by name
        available: Vec<String>,
    },

    /// The target project directory does not exist
    #[error("Target directory not found: {}", path.display())]
    TargetNotFound {
        /// The resolved, absolute target path
        path: PathBuf,
    },

    /// Unknown flag or missing positional argument
    #[error("{0}")]
    InvalidArgument(String),

    /// I/O failure while resolving inputs (e.g. no current directory)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_not_found_message_names_profile() {
        let err = SyncError::ProfileNotFound {
            name: "rails".to_string(),
            available: vec!["base".to_string()],
        };
        assert_eq!(err.to_string(), "Profile not found: rails");
    }

    #[test]
    fn test_target_not_found_message_shows_path() {
        let err = SyncError::TargetNotFound {
            path: PathBuf::from("/nope/app"),
        };
        assert_eq!(err.to_string(), "Target directory not found: /nope/app");
    }

    #[test]
    fn test_invalid_argument_message_is_verbatim() {
        let err = SyncError::InvalidArgument("Unknown option: --fast".to_string());
        assert_eq!(err.to_string(), "Unknown option: --fast");
    }
}
