//! Timestamp formatting utilities
//!
//! Console lines carry local wall-clock time. The default layout is the short
//! `2025-1-8 10:30:45` form; machine-oriented layouts are available too.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime layout of [`TimestampFormat::Console`].
pub const CONSOLE_TIME_LAYOUT: &str = "%Y-%-m-%-d %H:%M:%S";

/// Timestamp layout used by the console timestamp hook
///
/// # Examples
///
/// ```
/// use zlogger::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Console;
/// let timestamp = format.format(&Local::now());
/// assert!(timestamp.contains(':'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Short local time without zero padding on month and day: `2025-1-8 10:30:45`
    #[default]
    Console,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Console => datetime.format(CONSOLE_TIME_LAYOUT).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                // chrono reports unknown specifiers as a Display error.
                if write!(out, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(CONSOLE_TIME_LAYOUT).to_string();
                }
                out
            }
        }
    }

    /// Whether every specifier in a strftime `layout` is one chrono understands.
    #[must_use]
    pub fn is_valid_layout(layout: &str) -> bool {
        !StrftimeItems::new(layout).any(|item| matches!(item, Item::Error))
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
