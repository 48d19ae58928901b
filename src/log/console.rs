//! Colored terminal reporter
//!
//! Writes to stdout so the prompt and the log lines interleave in order.

use colored::{ColoredString, Colorize};

use super::{Level, Reporter};

/// Reporter that prints colored, tagged lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Create a console reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Colorize a level tag
fn colored_tag(level: Level) -> ColoredString {
    let tag = level.tag();
    match level {
        Level::Info => tag.blue(),
        Level::Success => tag.green(),
        Level::Warning | Level::DryRun => tag.yellow(),
        Level::Error => tag.red(),
        Level::Plain => tag.normal(),
    }
}

impl Reporter for ConsoleReporter {
    fn emit(&mut self, level: Level, message: &str) {
        match level {
            Level::Plain => println!("{message}"),
            Level::DryRun => println!("{} Would: {message}", colored_tag(level)),
            _ => println!("{} {message}", colored_tag(level)),
        }
    }
}
