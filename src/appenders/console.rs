//! Console appender implementation

use crate::core::{Appender, ConsoleFormatter, LogEntry, LoggerError, Result, TimestampFormat};
use std::io::Write;

/// Writes every entry, whatever its level, as one line on standard output.
pub struct ConsoleAppender {
    formatter: ConsoleFormatter,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            formatter: ConsoleFormatter::new(),
        }
    }

    /// Replace the line formatter, e.g. to override a rendering hook
    ///
    /// # Example
    ///
    /// ```
    /// use zlogger::{ConsoleAppender, ConsoleFormatter};
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_formatter(ConsoleFormatter::new().with_level_hook(|l| format!("{:>5}", l)));
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: ConsoleFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the timestamp format for this appender
    ///
    /// # Examples
    ///
    /// ```
    /// use zlogger::{ConsoleAppender, TimestampFormat};
    ///
    /// let appender = ConsoleAppender::new()
    ///     .with_timestamp_format(TimestampFormat::Rfc3339);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.formatter = self.formatter.with_timestamp_format(format);
        self
    }

    pub fn formatter(&self) -> &ConsoleFormatter {
        &self.formatter
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);

        // One locked write per line keeps concurrent lines from interleaving.
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", line)
            .map_err(|e| LoggerError::io_operation("writing to stdout", "console write failed", e))
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
