//! Usage and profile listings
//!
//! Rendered as plain strings so callers decide where they go; the binary
//! prints them to stdout next to the log lines.

/// Render available profile names as `  - name` lines, or a placeholder
#[must_use]
pub fn render_profile_list(profiles: &[String]) -> Vec<String> {
    if profiles.is_empty() {
        return vec!["  (none found)".to_string()];
    }
    profiles.iter().map(|p| format!("  - {p}")).collect()
}

/// Render the full usage text, including the discovered profiles
#[must_use]
pub fn render_usage(bin: &str, profiles: &[String]) -> String {
    let profile_lines = render_profile_list(profiles).join("\n");
    format!(
        "
Usage: {bin} <profile> <target-project-path> [options]

Arguments:
  profile              Name of the profile to sync (e.g., nextjs-supabase, base)
  target-project-path  Path to the target project

Options:
  --dry-run           Show what would be done without making changes
  --commands-only     Only sync commands directory
  --rules-only        Only sync rules directory
  --no-backup         Don't create backup of existing files
  --force             Overwrite without prompting
  --repo <DIR>        Repository holding profiles/ (env: CURSOR_SYNC_REPO)
  -h, --help          Show this help message

Available profiles:
{profile_lines}

Examples:
  {bin} nextjs-supabase ~/projects/my-app
  {bin} nextjs-supabase ~/projects/my-app --dry-run
  {bin} base ~/projects/my-app --commands-only
"
    )
}

/// Print the usage text to stdout
pub fn print_usage(bin: &str, profiles: &[String]) {
    println!("{}", render_usage(bin, profiles));
}
