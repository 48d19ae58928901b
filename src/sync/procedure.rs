//! The sync procedure
//!
//! One linear pass: header, confirmation gate, backup, then commands, rules
//! and `AGENTS.md`. In dry-run mode every mutating step is replaced by a
//! `[DRY-RUN]` line. Nothing is rolled back if a copy fails midway.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::log::Reporter;
use crate::sync::backup::BackupSnapshot;
use crate::sync::confirm::{Confirm, OVERWRITE_QUESTION};
use crate::sync::fsops;
use crate::sync::options::SyncOptions;
use crate::sync::profile::{Profile, AGENTS_MD, COMMANDS_DIR, RULES_DIR};
use crate::sync::target::Target;

/// What a completed run did (or, in dry-run mode, would have done)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Snapshot directory, if one was created during this run
    pub backup_dir: Option<PathBuf>,
    /// Destinations written, in order
    pub synced: Vec<PathBuf>,
}

/// Result of running the procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The user declined the confirmation prompt; nothing was touched
    Aborted,
    /// The run finished
    Completed(SyncReport),
}

/// A sync of one profile into one target
#[derive(Debug, Clone)]
pub struct Syncer<'a> {
    profile: &'a Profile,
    target: &'a Target,
    options: SyncOptions,
    started_at: DateTime<Utc>,
}

impl<'a> Syncer<'a> {
    /// Prepare a sync starting now
    #[must_use]
    pub fn new(profile: &'a Profile, target: &'a Target, options: SyncOptions) -> Self {
        Self {
            profile,
            target,
            options,
            started_at: Utc::now(),
        }
    }

    /// Use a fixed start time (names the backup snapshot)
    #[must_use]
    pub fn started_at(mut self, at: DateTime<Utc>) -> Self {
        self.started_at = at;
        self
    }

    /// Run the whole procedure
    pub fn run(&self, confirm: &mut dyn Confirm, log: &mut dyn Reporter) -> Result<SyncOutcome> {
        self.print_header(log);

        let cursor_dir = self.target.cursor_dir();
        if self.options.requires_confirmation(cursor_dir.exists()) {
            log.warning("Target already has a .cursor directory");
            if !confirm.confirm(OVERWRITE_QUESTION)? {
                log.info("Aborted by user");
                return Ok(SyncOutcome::Aborted);
            }
        }

        let mut snapshot = BackupSnapshot::new(self.target.root(), self.started_at);
        if self.options.backup && cursor_dir.exists() {
            self.backup(&mut snapshot, log)?;
        }

        let mut synced = Vec::new();

        if self.options.includes_commands() {
            log.info("Syncing commands...");
            self.sync_tree(
                &self.profile.commands_dir(),
                &self.target.commands_dir(),
                COMMANDS_DIR,
                &mut synced,
                log,
            )?;
        }

        if self.options.includes_rules() {
            log.info("Syncing rules...");
            self.sync_tree(
                &self.profile.rules_dir(),
                &self.target.rules_dir(),
                RULES_DIR,
                &mut synced,
                log,
            )?;
        }

        if self.options.includes_agents_md() {
            self.sync_agents_md(&mut synced, log)?;
        }

        log.blank();
        if self.options.dry_run {
            log.info("Dry run complete. No changes were made.");
        } else {
            log.success("Sync complete!");
            if let Some(dir) = snapshot.created_dir() {
                log.info(&format!("Backup saved to: {}", dir.display()));
            }
        }

        Ok(SyncOutcome::Completed(SyncReport {
            dry_run: self.options.dry_run,
            backup_dir: snapshot.created_dir().map(Path::to_path_buf),
            synced,
        }))
    }

    fn print_header(&self, log: &mut dyn Reporter) {
        log.blank();
        log.info("Cursor Config Sync");
        log.info("==================");
        log.info(&format!("Profile: {}", self.profile.name()));
        log.info(&format!("Target:  {}", self.target.root().display()));
        if self.options.dry_run {
            log.warning("DRY RUN MODE - No changes will be made");
        }
        log.blank();
    }

    /// Snapshot rules, commands and `AGENTS.md` before they are overwritten
    fn backup(&self, snapshot: &mut BackupSnapshot, log: &mut dyn Reporter) -> Result<()> {
        log.info("Creating backup...");

        if self.options.includes_rules() {
            self.backup_tree(&self.target.rules_dir(), RULES_DIR, snapshot, log)?;
        }
        if self.options.includes_commands() {
            self.backup_tree(&self.target.commands_dir(), COMMANDS_DIR, snapshot, log)?;
        }

        let agents_md = self.target.agents_md();
        if agents_md.exists() {
            if self.options.dry_run {
                log.dry_run(&format!(
                    "Backup {AGENTS_MD} to {}/",
                    snapshot.dir().display()
                ));
            } else {
                let dir = snapshot.ensure_created()?;
                fsops::copy_file(&agents_md, &dir.join(AGENTS_MD))?;
                log.info(&format!("Backed up {AGENTS_MD}"));
            }
        }

        Ok(())
    }

    fn backup_tree(
        &self,
        source: &Path,
        name: &str,
        snapshot: &mut BackupSnapshot,
        log: &mut dyn Reporter,
    ) -> Result<()> {
        if !fsops::has_visible_entries(source) {
            return Ok(());
        }

        let dest = snapshot.dir().join(name);
        if self.options.dry_run {
            log.dry_run(&format!(
                "Backup {} to {}",
                source.display(),
                dest.display()
            ));
        } else {
            snapshot.ensure_created()?;
            fsops::copy_tree(source, &dest)?;
            log.info(&format!(
                "Backed up {} to {}",
                source.display(),
                dest.display()
            ));
        }
        Ok(())
    }

    /// Merge a profile subtree into the target
    fn sync_tree(
        &self,
        source: &Path,
        dest: &Path,
        name: &str,
        synced: &mut Vec<PathBuf>,
        log: &mut dyn Reporter,
    ) -> Result<()> {
        if !source.exists() {
            log.warning(&format!(
                "Source {name} directory not found: {}",
                source.display()
            ));
            return Ok(());
        }

        let entries = fsops::visible_entries(source);
        if entries.is_empty() {
            log.warning(&format!(
                "Source {name} directory is empty: {}",
                source.display()
            ));
            return Ok(());
        }

        if self.options.dry_run {
            log.dry_run(&format!(
                "Copy {}/* to {}/",
                source.display(),
                dest.display()
            ));
            log.info("Files that would be copied:");
            for entry in &entries {
                log.plain(&format!("  - {entry}"));
            }
        } else {
            fsops::copy_tree(source, dest)?;
            log.success(&format!("Copied {name} to {}", dest.display()));
        }

        synced.push(dest.to_path_buf());
        Ok(())
    }

    /// Copy `AGENTS.md`; a profile without one is skipped silently
    fn sync_agents_md(&self, synced: &mut Vec<PathBuf>, log: &mut dyn Reporter) -> Result<()> {
        let source = self.profile.agents_md();
        if !source.exists() {
            return Ok(());
        }

        log.info(&format!("Syncing {AGENTS_MD}..."));
        let dest = self.target.agents_md();
        if self.options.dry_run {
            log.dry_run(&format!(
                "Copy {} to {}",
                source.display(),
                dest.display()
            ));
        } else {
            fsops::copy_file(&source, &dest)?;
            log.success(&format!("Copied {AGENTS_MD} to {}", dest.display()));
        }

        synced.push(dest);
        Ok(())
    }
}
