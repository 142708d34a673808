//! In-memory appender
//!
//! Renders lines exactly as the console would and keeps them in a buffer that
//! every clone of the appender shares. Useful for capturing output in tests or
//! for hosts that forward log lines elsewhere.

use crate::core::{Appender, ConsoleFormatter, LogEntry, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct BufferAppender {
    formatter: ConsoleFormatter,
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferAppender {
    pub fn new() -> Self {
        Self::with_formatter(ConsoleFormatter::new())
    }

    pub fn with_formatter(formatter: ConsoleFormatter) -> Self {
        Self {
            formatter,
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Remove and return the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Default for BufferAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for BufferAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        self.lines.lock().push(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_clones_share_lines() {
        let buffer = BufferAppender::with_formatter(ConsoleFormatter::plain());
        let mut writer = buffer.clone();

        writer
            .append(&LogEntry::new(LogLevel::Info, "first".into()))
            .expect("append");
        writer
            .append(&LogEntry::new(LogLevel::Warn, "second".into()))
            .expect("append");

        assert_eq!(buffer.len(), 2);
        let lines = buffer.take();
        assert!(lines[0].ends_with("[INFO] first"));
        assert!(lines[1].ends_with("[WARN] second"));
        assert!(buffer.is_empty());
    }
}
