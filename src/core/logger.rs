//! Logger handle
//!
//! A [`Logger`] pairs a threshold with one output sink. Every emitted message
//! is wrapped in its level's color before being handed to the sink, and both
//! the plain (`info`) and formatted (`infof`) forms go through the same gate.

use super::{
    appender::{shared, Appender, SharedAppender},
    color::{color_for, colorize},
    error::Result,
    log_context::LogContext,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::appenders::ConsoleAppender;
use crate::core::ConsoleFormatter;
use std::fmt;
use std::sync::atomic::{AtomicI8, Ordering};
use std::sync::Arc;

/// Exit status used when a fatal message terminates the process.
pub const FATAL_EXIT_CODE: i32 = 1;

pub struct Logger {
    /// Raw rank; may sit below `Trace` for extra verbosity tiers.
    threshold: AtomicI8,
    sink: SharedAppender,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Handle writing to `appender`, emitting everything (threshold `Trace`).
    #[must_use]
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        Self::from_shared(shared(appender), LogLevel::Trace.rank())
    }

    /// Colored console handle on standard output, threshold `Trace`.
    #[must_use]
    pub fn console() -> Self {
        Self::new(ConsoleAppender::new())
    }

    pub(crate) fn from_shared(sink: SharedAppender, threshold: i8) -> Self {
        Self {
            threshold: AtomicI8::new(clamp_rank(threshold)),
            sink,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Handle sharing this handle's sink but with its own threshold.
    ///
    /// Changing the threshold of either handle afterwards does not affect the
    /// other.
    #[must_use]
    pub fn with_level(&self, level: LogLevel) -> Logger {
        Self::from_shared(Arc::clone(&self.sink), level.rank())
    }

    pub fn set_level(&self, level: LogLevel) {
        self.set_level_rank(level.rank());
    }

    /// Set a raw threshold rank.
    ///
    /// Ranks below `Trace` (-1) are accepted and behave as "more verbose than
    /// trace": every message passes. Ranks above `Disabled` are clamped to it.
    pub fn set_level_rank(&self, rank: i8) {
        self.threshold.store(clamp_rank(rank), Ordering::Release);
    }

    /// Current threshold, or `None` when it is a raw rank below `Trace`.
    pub fn level(&self) -> Option<LogLevel> {
        LogLevel::try_from(self.level_rank()).ok()
    }

    #[inline]
    pub fn level_rank(&self) -> i8 {
        self.threshold.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level.passes(self.level_rank())
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Name of the sink this handle writes to.
    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// Whether `self` and `other` write to the same sink.
    pub fn shares_sink_with(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        if self.gate(level) {
            self.emit(level, &message.to_string(), LogContext::new());
        }
    }

    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.gate(level) {
            self.emit(level, &fmt::format(args), LogContext::new());
        }
    }

    /// Log with structured fields, rendered by the sink's field hooks
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl fmt::Display,
        context: LogContext,
    ) {
        if self.gate(level) {
            self.emit(level, &message.to_string(), context);
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Threshold check, counting suppressed calls.
    fn gate(&self, level: LogLevel) -> bool {
        if self.is_enabled(level) {
            true
        } else {
            self.metrics.record_suppressed();
            false
        }
    }

    fn emit(&self, level: LogLevel, text: &str, context: LogContext) {
        let message = colorize(color_for(level), text);
        let entry = LogEntry::new(level, message).with_context(context);

        let mut sink = self.sink.lock();
        // A panicking sink must not take the caller down with it.
        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.append(&entry)));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", sink.name(), e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOGGER CRITICAL] Appender '{}' panicked: {}", sink.name(), panic_msg);
                self.metrics.record_write_failure();
            }
        }
    }

    fn flush_quietly(&self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush: {}", e);
        }
    }

    fn terminate(&self, level: LogLevel, text: String) -> ! {
        if self.gate(level) {
            self.emit(level, &text, LogContext::new());
        }
        self.flush_quietly();

        if level == LogLevel::Fatal {
            std::process::exit(FATAL_EXIT_CODE);
        }
        std::panic::panic_any(text)
    }

    #[inline]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Trace, args);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Debug, args);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    /// Alias of [`Logger::info`].
    #[inline]
    pub fn print(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    /// Alias of [`Logger::infof`].
    #[inline]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Info, args);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Warn, args);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.logf(LogLevel::Error, args);
    }

    /// Log at `Fatal`, flush the sink and exit the process with status 1.
    ///
    /// The process exits even when the threshold filters the message out.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.terminate(LogLevel::Fatal, message.to_string())
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(LogLevel::Fatal, fmt::format(args))
    }

    /// Log at `Panic`, flush the sink and panic with the message.
    ///
    /// The panic payload is the uncolored message as a `String`; it is raised
    /// even when the threshold filters the message out.
    ///
    /// ```
    /// use std::panic::AssertUnwindSafe;
    /// use zlogger::{BufferAppender, Logger};
    ///
    /// let logger = Logger::new(BufferAppender::new());
    /// let caught = std::panic::catch_unwind(AssertUnwindSafe(|| logger.panic("disk gone")));
    /// let payload = caught.unwrap_err();
    /// assert_eq!(payload.downcast_ref::<String>().unwrap(), "disk gone");
    /// ```
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.terminate(LogLevel::Panic, message.to_string())
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.terminate(LogLevel::Panic, fmt::format(args))
    }
}

fn clamp_rank(rank: i8) -> i8 {
    rank.min(LogLevel::Disabled.rank())
}

impl Default for Logger {
    fn default() -> Self {
        Self::console()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.level_rank())
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush_quietly();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use zlogger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .appender(BufferAppender::new())
///     .build();
/// assert_eq!(logger.level(), Some(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    threshold: i8,
    appender: Option<Box<dyn Appender>>,
    formatter: Option<ConsoleFormatter>,
}

impl LoggerBuilder {
    /// Create a new builder: console output, threshold `Trace`
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Trace.rank(),
            appender: None,
            formatter: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.threshold = level.rank();
        self
    }

    /// Raw threshold rank, see [`Logger::set_level_rank`].
    #[must_use = "builder methods return a new value"]
    pub fn min_level_rank(mut self, rank: i8) -> Self {
        self.threshold = rank;
        self
    }

    /// Set the sink. A handle has exactly one; a later call replaces it.
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Formatter for the default console sink.
    ///
    /// Ignored when an explicit appender is set.
    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: ConsoleFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let appender: Box<dyn Appender> = match (self.appender, self.formatter) {
            (Some(appender), _) => appender,
            (None, Some(formatter)) => Box::new(ConsoleAppender::new().with_formatter(formatter)),
            (None, None) => Box::new(ConsoleAppender::new()),
        };
        Logger::from_shared(Arc::new(parking_lot::Mutex::new(appender)), self.threshold)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
