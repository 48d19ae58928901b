//! Sync options
//!
//! Resolved once from the command line (and repository defaults), then
//! passed by value to every step of the procedure.

/// Immutable option set for one sync run
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Log every mutating action instead of performing it
    pub dry_run: bool,
    /// Restrict sync and backup to the commands subtree
    pub commands_only: bool,
    /// Restrict sync and backup to the rules subtree
    pub rules_only: bool,
    /// Snapshot existing target content before overwriting
    pub backup: bool,
    /// Skip the confirmation prompt
    pub force: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            commands_only: false,
            rules_only: false,
            backup: true,
            force: false,
        }
    }
}

impl SyncOptions {
    /// Whether the commands subtree is synced (and backed up)
    #[must_use]
    pub const fn includes_commands(&self) -> bool {
        !self.rules_only
    }

    /// Whether the rules subtree is synced (and backed up)
    #[must_use]
    pub const fn includes_rules(&self) -> bool {
        !self.commands_only
    }

    /// Whether `AGENTS.md` is synced. Only a full sync touches it.
    #[must_use]
    pub const fn includes_agents_md(&self) -> bool {
        !self.commands_only && !self.rules_only
    }

    /// Whether the user must confirm before an existing `.cursor` is touched
    #[must_use]
    pub const fn requires_confirmation(&self, cursor_dir_exists: bool) -> bool {
        cursor_dir_exists && !self.force && !self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_sync_with_backup() {
        let options = SyncOptions::default();
        assert!(options.backup);
        assert!(!options.dry_run);
        assert!(!options.force);
        assert!(options.includes_commands());
        assert!(options.includes_rules());
        assert!(options.includes_agents_md());
    }

    #[test]
    fn test_commands_only_scope() {
        let options = SyncOptions {
            commands_only: true,
            ..SyncOptions::default()
        };
        assert!(options.includes_commands());
        assert!(!options.includes_rules());
        assert!(!options.includes_agents_md());
    }

    #[test]
    fn test_rules_only_scope() {
        let options = SyncOptions {
            rules_only: true,
            ..SyncOptions::default()
        };
        assert!(!options.includes_commands());
        assert!(options.includes_rules());
        assert!(!options.includes_agents_md());
    }

    #[test]
    fn test_both_scope_flags_suppress_everything() {
        let options = SyncOptions {
            commands_only: true,
            rules_only: true,
            ..SyncOptions::default()
        };
        assert!(!options.includes_commands());
        assert!(!options.includes_rules());
        assert!(!options.includes_agents_md());
    }

    #[test]
    fn test_confirmation_only_without_force_or_dry_run() {
        let options = SyncOptions::default();
        assert!(options.requires_confirmation(true));
        assert!(!options.requires_confirmation(false));

        let forced = SyncOptions {
            force: true,
            ..SyncOptions::default()
        };
        assert!(!forced.requires_confirmation(true));

        let dry = SyncOptions {
            dry_run: true,
            ..SyncOptions::default()
        };
        assert!(!dry.requires_confirmation(true));
    }
}
