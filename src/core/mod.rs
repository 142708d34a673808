//! Core logger types and traits

pub mod appender;
pub mod color;
pub mod config;
pub mod console_format;
pub mod error;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod provider;
pub mod timestamp;

pub use appender::{Appender, SharedAppender};
pub use color::{color_for, color_for_label, colorize, ColorCode, DEFAULT_COLOR, RESET};
pub use config::LoggerConfig;
pub use console_format::{ConsoleFormatter, FormatHook};
pub use error::{LoggerError, Result};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use provider::{default_provider, reset_default, LoggerProvider};
pub use timestamp::TimestampFormat;
