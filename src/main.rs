//! cursor-sync - Apply a named Cursor profile to a project
//!
//! CLI entry point. Exit status is 0 on success or a declined prompt, and 1
//! for usage, validation and copy failures.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::{ContextKind, ContextValue};
use clap::{ArgAction, Parser};

use cursor_sync::cli::{print_usage, render_profile_list};
use cursor_sync::{
    ConsoleReporter, ProfileStore, RepoConfig, Reporter, StdinConfirm, SyncError, SyncOptions,
    Syncer, Target,
};

const BIN_NAME: &str = "cursor-sync";
const REPO_ENV: &str = "CURSOR_SYNC_REPO";

/// Sync a profile's commands, rules and AGENTS.md into a project
///
/// Copies `<repo>/profiles/<profile>/{commands,rules}` into
/// `<target>/.cursor/` and `AGENTS.md` into the target root, backing up
/// whatever is overwritten.
#[allow(clippy::struct_excessive_bools)]
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, about, disable_help_flag = true, args_override_self = true)]
struct Cli {
    /// Name of the profile to sync
    profile: Option<String>,

    /// Path to the target project
    target: Option<PathBuf>,

    /// Show what would be done without making changes
    #[arg(long)]
    dry_run: bool,

    /// Only sync the commands directory
    #[arg(long)]
    commands_only: bool,

    /// Only sync the rules directory
    #[arg(long)]
    rules_only: bool,

    /// Don't back up existing files
    #[arg(long)]
    no_backup: bool,

    /// Overwrite without prompting
    #[arg(long)]
    force: bool,

    /// Repository holding the profiles directory (defaults to the current directory)
    #[arg(long, env = REPO_ENV, value_name = "DIR")]
    repo: Option<PathBuf>,

    /// Show usage and available profiles
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    help: bool,
}

impl Cli {
    /// Combine flags with repository defaults. `--no-backup` always wins.
    const fn options(&self, config: &RepoConfig) -> SyncOptions {
        SyncOptions {
            dry_run: self.dry_run,
            commands_only: self.commands_only,
            rules_only: self.rules_only,
            backup: config.defaults.backup && !self.no_backup,
            force: self.force,
        }
    }
}

/// Resolve the repository root: explicit flag/env, else the current directory.
fn resolve_repo_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(explicit.map_or_else(|| cwd.clone(), |repo| cwd.join(repo)))
}

/// Profile store for usage listings. A broken config falls back to defaults
/// so help output still works.
fn usage_store(repo: &Path) -> ProfileStore {
    let config = RepoConfig::load(repo).unwrap_or_default();
    ProfileStore::new(config.profiles_root(repo))
}

/// Print usage with the discovered profiles and exit 1
fn exit_with_usage(store: &ProfileStore) -> ! {
    print_usage(BIN_NAME, &store.available());
    std::process::exit(1);
}

/// One-line message for a clap parse failure
fn parse_error_message(err: &clap::Error) -> String {
    if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
        if arg.starts_with('-') {
            return format!("Unknown option: {arg}");
        }
        return format!("Unexpected argument: {arg}");
    }

    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

/// `--` is not an option this tool knows, so it is rejected like any other
/// unrecognized flag instead of ending option parsing.
fn check_option_terminator(args: &[OsString]) -> Result<(), SyncError> {
    if args.iter().skip(1).any(|arg| arg == "--") {
        return Err(SyncError::InvalidArgument("Unknown option: --".to_string()));
    }
    Ok(())
}

/// Report an argument error, print usage and exit 1
fn exit_with_argument_error(err: &SyncError, log: &mut dyn Reporter) -> ! {
    log.error(&err.to_string());
    let repo = std::env::var_os(REPO_ENV).map(PathBuf::from);
    match resolve_repo_root(repo.as_deref()) {
        Ok(repo) => exit_with_usage(&usage_store(&repo)),
        Err(_) => std::process::exit(1),
    }
}

/// Log a failure; a missing profile also lists the ones that exist.
fn report_error(err: &anyhow::Error, log: &mut dyn Reporter) {
    match err.downcast_ref::<SyncError>() {
        Some(SyncError::ProfileNotFound { available, .. }) => {
            log.error(&err.to_string());
            log.blank();
            log.plain("Available profiles:");
            for line in render_profile_list(available) {
                log.plain(&line);
            }
        }
        _ => log.error(&format!("{err:#}")),
    }
}

fn run(cli: &Cli, log: &mut dyn Reporter) -> Result<()> {
    let repo = resolve_repo_root(cli.repo.as_deref())?;

    if cli.help {
        exit_with_usage(&usage_store(&repo));
    }
    let (Some(profile_name), Some(target_path)) = (&cli.profile, &cli.target) else {
        exit_with_usage(&usage_store(&repo));
    };

    let config = RepoConfig::load(&repo)?;
    let store = ProfileStore::new(config.profiles_root(&repo));
    let profile = store.resolve(profile_name)?;
    let target = Target::resolve(target_path)?;

    Syncer::new(&profile, &target, cli.options(&config)).run(&mut StdinConfirm, log)?;
    Ok(())
}

fn main() {
    let mut log = ConsoleReporter::new();

    let args: Vec<OsString> = std::env::args_os().collect();
    if let Err(err) = check_option_terminator(&args) {
        exit_with_argument_error(&err, &mut log);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(err) => exit_with_argument_error(
            &SyncError::InvalidArgument(parse_error_message(&err)),
            &mut log,
        ),
    };

    if let Err(err) = run(&cli, &mut log) {
        report_error(&err, &mut log);
        std::process::exit(1);
    }
}
