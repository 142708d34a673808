//! Console line rendering
//!
//! A console line is built from segments, each produced by its own hook:
//! timestamp, level tag, message, then one `name` + `value` pair per field.
//! Segments are joined by single spaces.
//!
//! ```text
//! [2025-1-8 10:30:45] [INFO] server started (port:8080)
//! ```
//!
//! With the default hooks every segment carries its own escapes and ends with
//! a reset, so reordering or overriding one hook never bleeds color into the
//! others.

use super::color::{color_for_label, paint_segment, strip_ansi, TIMESTAMP_COLOR, RESET};
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::fmt;
use std::sync::Arc;

/// Renders one segment of a console line.
pub type FormatHook = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone)]
pub struct ConsoleFormatter {
    timestamp_format: TimestampFormat,
    format_timestamp: FormatHook,
    format_level: FormatHook,
    format_message: FormatHook,
    format_field_name: FormatHook,
    format_field_value: FormatHook,
}

impl ConsoleFormatter {
    /// Formatter with the colored default hooks.
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            format_timestamp: Arc::new(|ts: &str| {
                paint_segment(TIMESTAMP_COLOR, &format!("[{}]", ts))
            }),
            format_level: Arc::new(|label: &str| {
                paint_segment(color_for_label(label), &format!("[{}]", label.to_uppercase()))
            }),
            format_message: Arc::new(|msg: &str| format!("{}{}{}", RESET, msg, RESET)),
            format_field_name: Arc::new(|name: &str| format!("{}({}:", RESET, name)),
            format_field_value: Arc::new(|value: &str| format!("{}){}", value, RESET)),
        }
    }

    /// Formatter emitting no escape sequences at all.
    ///
    /// Escapes already embedded in messages are stripped as well.
    pub fn plain() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            format_timestamp: Arc::new(|ts: &str| format!("[{}]", ts)),
            format_level: Arc::new(|label: &str| format!("[{}]", label.to_uppercase())),
            format_message: Arc::new(strip_ansi),
            format_field_name: Arc::new(|name: &str| format!("({}:", name)),
            format_field_value: Arc::new(|value: &str| format!("{})", value)),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_timestamp = Arc::new(hook);
        self
    }

    /// The level hook receives the lower-case label, e.g. `"warn"`.
    #[must_use]
    pub fn with_level_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_level = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn with_message_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_message = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn with_field_name_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_field_name = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn with_field_value_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.format_field_value = Arc::new(hook);
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Render `entry` as a single line, without a trailing newline.
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut parts = Vec::with_capacity(3 + entry.context.len());

        let ts = self.timestamp_format.format(&entry.timestamp);
        parts.push((self.format_timestamp)(ts.as_str()));

        let label = entry.level.label();
        if !label.is_empty() {
            parts.push((self.format_level)(label));
        }

        parts.push((self.format_message)(entry.message.as_str()));

        for (name, value) in entry.context.iter() {
            let name = (self.format_field_name)(name);
            let value = (self.format_field_value)(value.to_string().as_str());
            parts.push(format!("{}{}", name, value));
        }

        parts.join(" ")
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleFormatter")
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{colorize, INFO_COLOR};
    use crate::core::{LogContext, LogLevel};
    use chrono::{Local, TimeZone};

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let ts = Local
            .with_ymd_and_hms(2025, 1, 8, 9, 5, 7)
            .single()
            .expect("valid datetime");
        LogEntry::new(level, message.to_string()).with_timestamp(ts)
    }

    #[test]
    fn test_default_line_layout() {
        let formatter = ConsoleFormatter::new();
        let line = formatter.format(&entry(LogLevel::Info, &colorize(INFO_COLOR, "ready")));

        assert_eq!(
            line,
            "\x1b[0m\x1b[90m[2025-1-8 09:05:07]\x1b[0m \
             \x1b[0m\x1b[32m[INFO]\x1b[0m \
             \x1b[0m\x1b[32mready\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn test_every_segment_reset_terminated() {
        let formatter = ConsoleFormatter::new()
            .with_timestamp_format(TimestampFormat::Custom("%H:%M:%S".into()));
        let ctx = LogContext::new().with_field("port", 8080).with_field("host", "local");
        let line = formatter.format(&entry(LogLevel::Warn, "bind").with_context(ctx));

        for segment in line.split(' ') {
            assert!(segment.ends_with(RESET), "segment {:?} not reset-terminated", segment);
        }
        assert!(strip_ansi(&line).ends_with("bind (host:local) (port:8080)"));
    }

    #[test]
    fn test_plain_formatter_has_no_escapes() {
        let formatter = ConsoleFormatter::plain();
        let line = formatter.format(&entry(LogLevel::Error, &colorize(INFO_COLOR, "boom")));
        assert_eq!(line, "[2025-1-8 09:05:07] [ERROR] boom");
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_no_level_omits_tag() {
        let line = ConsoleFormatter::plain().format(&entry(LogLevel::NoLevel, "raw"));
        assert_eq!(line, "[2025-1-8 09:05:07] raw");
    }

    #[test]
    fn test_hook_overrides() {
        let formatter = ConsoleFormatter::plain()
            .with_timestamp_format(TimestampFormat::Custom("%H:%M".into()))
            .with_level_hook(|label| format!("<{}>", label))
            .with_field_name_hook(|name| format!("{}=", name))
            .with_field_value_hook(|value| value.to_string());
        let ctx = LogContext::new().with_field("n", 1);
        let line = formatter.format(&entry(LogLevel::Debug, "tick").with_context(ctx));
        assert_eq!(line, "[09:05] <debug> tick n=1");
    }
}
