//! cursor-sync - Apply a named Cursor profile to a project
//!
//! Copies a profile's `commands/`, `rules/` and `AGENTS.md` from a central
//! repository into a project's `.cursor/` directory, backing up what it
//! overwrites into a timestamped snapshot.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod sync;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use config::RepoConfig;
pub use error::SyncError;
pub use log::{ConsoleReporter, Level, MemoryReporter, Reporter};
pub use sync::{
    Confirm, FixedAnswer, Profile, ProfileStore, StdinConfirm, SyncOptions, SyncOutcome,
    SyncReport, Syncer, Target,
};
