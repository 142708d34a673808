//! # zlogger
//!
//! A process-wide, color-coded console logging facade.
//!
//! ## Features
//!
//! - **Leveled output**: trace, debug, info, warn, error, fatal and panic, each
//!   in a plain (`info`) and a formatted (`infof`) form
//! - **Colored console lines**: every segment carries its own ANSI color and reset
//! - **Swappable default**: [`reset_default`] replaces the handle behind the
//!   crate-level functions in a single step
//! - **Injectable**: [`LoggerProvider`] and [`Logger`] can be passed around
//!   explicitly instead of using the global
//!
//! ```
//! use zlogger::prelude::*;
//!
//! zlogger::info("starting");
//! zlogger::set_level(LogLevel::Warn);
//! zlogger::debug("not shown");
//!
//! let buffer = BufferAppender::new();
//! let replacement = Logger::builder()
//!     .min_level(LogLevel::Debug)
//!     .appender(buffer.clone())
//!     .build();
//! zlogger::reset_default(replacement);
//! zlogger::debugf(format_args!("now routed through the buffer: {}", true));
//! assert_eq!(buffer.len(), 1);
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{BufferAppender, ConsoleAppender};
    pub use crate::core::{
        default_provider, reset_default, Appender, ColorCode, ConsoleFormatter, FieldValue,
        LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, LoggerProvider, Result, TimestampFormat,
    };
}

pub use appenders::{BufferAppender, ConsoleAppender};
pub use core::{
    color_for, color_for_label, colorize, default_provider, Appender, ColorCode, ConsoleFormatter,
    FieldValue, FormatHook, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerProvider, Result, SharedAppender, TimestampFormat,
    DEFAULT_COLOR, FATAL_EXIT_CODE, RESET,
};
pub use global::{
    debug, debugf, error, errorf, fatal, fatalf, get_logger, info, infof, level, panic, panicf,
    print, printf, reset_default, set_level, trace, tracef, warn, warnf,
};
