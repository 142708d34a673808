//! Deserializable logger settings
//!
//! ```
//! use zlogger::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "warn", "colors": false }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Warn);
//! let logger = config.build().unwrap();
//! assert_eq!(logger.level(), Some(LogLevel::Warn));
//! ```

use super::console_format::ConsoleFormatter;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::timestamp::TimestampFormat;
use crate::appenders::ConsoleAppender;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub colors: bool,
    /// strftime layout for the console timestamp; the short console layout if unset.
    pub timestamp_format: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Trace,
            colors: true,
            timestamp_format: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn formatter(&self) -> Result<ConsoleFormatter> {
        let formatter = if self.colors {
            ConsoleFormatter::new()
        } else {
            ConsoleFormatter::plain()
        };

        match self.timestamp_format.as_deref() {
            None => Ok(formatter),
            Some(layout) if layout.trim().is_empty() => Err(LoggerError::config(
                "LoggerConfig",
                "timestamp_format must not be empty",
            )),
            Some(layout) if !TimestampFormat::is_valid_layout(layout) => Err(LoggerError::config(
                "LoggerConfig",
                format!("timestamp_format {:?} has an unknown specifier", layout),
            )),
            Some(layout) => {
                Ok(formatter.with_timestamp_format(TimestampFormat::Custom(layout.to_string())))
            }
        }
    }

    /// Console handle configured from these settings.
    pub fn build(&self) -> Result<Logger> {
        let appender = ConsoleAppender::new().with_formatter(self.formatter()?);
        Ok(Logger::builder()
            .min_level(self.level)
            .appender(appender)
            .build())
    }
}
