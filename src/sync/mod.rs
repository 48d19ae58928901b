//! Profile synchronization
//!
//! Resolves a profile and a target, then runs the [`Syncer`] procedure:
//! confirm, back up, copy commands, rules and `AGENTS.md`.

pub mod backup;
pub mod confirm;
pub mod fsops;
pub mod options;
pub mod procedure;
pub mod profile;
pub mod target;

pub use backup::BackupSnapshot;
pub use confirm::{Confirm, FixedAnswer, StdinConfirm};
pub use options::SyncOptions;
pub use procedure::{SyncOutcome, SyncReport, Syncer};
pub use profile::{Profile, ProfileStore};
pub use target::Target;
