//! Logging and observability
//!
//! Every line the sync procedure prints goes through a [`Reporter`], so the
//! same procedure can write colored output to the terminal or record it in
//! memory for tests.

pub mod console;
pub mod memory;

pub use console::ConsoleReporter;
pub use memory::MemoryReporter;

/// Severity / kind of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Progress information
    Info,
    /// A completed action
    Success,
    /// Something was skipped or needs attention
    Warning,
    /// A failure reported to the user
    Error,
    /// An action that dry-run mode would have performed
    DryRun,
    /// Unprefixed text (listings, blank separators)
    Plain,
}

impl Level {
    /// Prefix printed before the message, without color
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "[INFO]",
            Self::Success => "[SUCCESS]",
            Self::Warning => "[WARNING]",
            Self::Error => "[ERROR]",
            Self::DryRun => "[DRY-RUN]",
            Self::Plain => "",
        }
    }
}

/// Sink for leveled log lines
pub trait Reporter {
    /// Emit one line at the given level
    fn emit(&mut self, level: Level, message: &str);

    /// Emit an `[INFO]` line
    fn info(&mut self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Emit a `[SUCCESS]` line
    fn success(&mut self, message: &str) {
        self.emit(Level::Success, message);
    }

    /// Emit a `[WARNING]` line
    fn warning(&mut self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Emit an `[ERROR]` line
    fn error(&mut self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Emit a `[DRY-RUN] Would: ...` line
    fn dry_run(&mut self, message: &str) {
        self.emit(Level::DryRun, message);
    }

    /// Emit a line with no prefix
    fn plain(&mut self, message: &str) {
        self.emit(Level::Plain, message);
    }

    /// Emit an empty separator line
    fn blank(&mut self) {
        self.emit(Level::Plain, "");
    }
}

/// Render a log line without color, as it appears in captured output.
#[must_use]
pub fn format_line(level: Level, message: &str) -> String {
    match level {
        Level::Plain => message.to_string(),
        Level::DryRun => format!("{} Would: {message}", level.tag()),
        _ => format!("{} {message}", level.tag()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_prefixes() {
        assert_eq!(format_line(Level::Info, "hi"), "[INFO] hi");
        assert_eq!(format_line(Level::Success, "done"), "[SUCCESS] done");
        assert_eq!(format_line(Level::Warning, "hm"), "[WARNING] hm");
        assert_eq!(format_line(Level::Error, "bad"), "[ERROR] bad");
    }

    #[test]
    fn test_format_line_dry_run_says_would() {
        assert_eq!(
            format_line(Level::DryRun, "Copy a to b"),
            "[DRY-RUN] Would: Copy a to b"
        );
    }

    #[test]
    fn test_format_line_plain_is_unprefixed() {
        assert_eq!(format_line(Level::Plain, "  - x.md"), "  - x.md");
        assert_eq!(format_line(Level::Plain, ""), "");
    }

    #[test]
    fn test_default_methods_route_to_levels() {
        let mut log = MemoryReporter::new();
        log.info("a");
        log.success("b");
        log.warning("c");
        log.error("d");
        log.dry_run("e");
        log.plain("f");
        log.blank();

        let levels: Vec<Level> = log.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            levels,
            vec![
                Level::Info,
                Level::Success,
                Level::Warning,
                Level::Error,
                Level::DryRun,
                Level::Plain,
                Level::Plain,
            ]
        );
    }
}
