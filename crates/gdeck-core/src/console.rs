//! Console log entries for the command console surface.

use chrono::{DateTime, Local};

/// Origin/kind of a console entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKind {
    /// A command the user sent.
    Command,
    /// A response message from the device.
    Response,
    /// A dispatch failure.
    Error,
}

/// A single console line with timestamp and kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleEntry {
    pub timestamp: DateTime<Local>,
    pub kind: ConsoleKind,
    pub text: String,
}

impl ConsoleEntry {
    pub fn new(kind: ConsoleKind, text: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            text: text.into(),
        }
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Command, text)
    }

    pub fn response(text: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Response, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(ConsoleKind::Error, text)
    }
}

/// Append-only console log, cleared only by explicit user action.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLog {
    entries: Vec<ConsoleEntry>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ConsoleEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut log = ConsoleLog::new();
        log.push(ConsoleEntry::command("power on"));
        log.push(ConsoleEntry::response("OK"));
        log.push(ConsoleEntry::error("device unreachable"));

        let kinds: Vec<_> = log.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ConsoleKind::Command,
                ConsoleKind::Response,
                ConsoleKind::Error
            ]
        );
    }

    #[test]
    fn test_clear_empties_log() {
        let mut log = ConsoleLog::new();
        log.push(ConsoleEntry::command("restart"));
        assert_eq!(log.len(), 1);

        log.clear();
        assert!(log.is_empty());
    }
}
