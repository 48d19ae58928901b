//! In-memory reporter for tests and embedding callers

use super::{format_line, Level, Reporter};

/// Reporter that records every line instead of printing it
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    entries: Vec<(Level, String)>,
}

impl MemoryReporter {
    /// Create an empty recorder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// All recorded `(level, message)` pairs, in emission order
    #[must_use]
    pub fn entries(&self) -> &[(Level, String)] {
        &self.entries
    }

    /// Recorded lines rendered as they would appear uncolored on a terminal
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(level, message)| format_line(*level, message))
            .collect()
    }

    /// Messages recorded at a single level
    #[must_use]
    pub fn messages(&self, level: Level) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// True if any recorded message at any level contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, m)| m.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn emit(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut log = MemoryReporter::new();
        log.info("Syncing commands...");
        log.dry_run("Copy a/* to b/");

        assert_eq!(
            log.lines(),
            vec![
                "[INFO] Syncing commands...".to_string(),
                "[DRY-RUN] Would: Copy a/* to b/".to_string(),
            ]
        );
    }

    #[test]
    fn test_messages_filters_by_level() {
        let mut log = MemoryReporter::new();
        log.warning("one");
        log.info("two");
        log.warning("three");

        assert_eq!(log.messages(Level::Warning), vec!["one", "three"]);
        assert!(log.contains("two"));
        assert!(!log.contains("four"));
    }
}
