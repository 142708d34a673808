//! Swappable logger registry
//!
//! A [`LoggerProvider`] holds the active handle behind one pointer. Every
//! forwarding call reads that pointer once, so a [`LoggerProvider::reset`] is a
//! single swap: a concurrent call sees either the old handle or the new one,
//! never some operations on each.
//!
//! Components that need logging can take a `&LoggerProvider` (or an
//! `Arc<Logger>` from [`LoggerProvider::current`]); the process-wide instance
//! from [`default_provider`] backs the crate-level functions.

use super::log_level::LogLevel;
use super::logger::Logger;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub struct LoggerProvider {
    current: RwLock<Arc<Logger>>,
}

impl LoggerProvider {
    pub fn new(logger: Logger) -> Self {
        Self::from_arc(Arc::new(logger))
    }

    pub fn from_arc(logger: Arc<Logger>) -> Self {
        Self {
            current: RwLock::new(logger),
        }
    }

    /// Snapshot of the active handle.
    #[inline]
    pub fn current(&self) -> Arc<Logger> {
        Arc::clone(&self.current.read())
    }

    /// Route every subsequent call through `logger`; returns the previous handle.
    pub fn reset(&self, logger: Logger) -> Arc<Logger> {
        self.reset_arc(Arc::new(logger))
    }

    pub fn reset_arc(&self, logger: Arc<Logger>) -> Arc<Logger> {
        std::mem::replace(&mut *self.current.write(), logger)
    }

    /// Set the threshold of the active handle.
    pub fn set_level(&self, level: LogLevel) {
        self.current().set_level(level);
    }

    pub fn level(&self) -> Option<LogLevel> {
        self.current().level()
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.current().log(level, message);
    }

    pub fn logf(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.current().logf(level, args);
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.current().trace(message);
    }

    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.current().tracef(args);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.current().debug(message);
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.current().debugf(args);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.current().info(message);
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.current().infof(args);
    }

    pub fn print(&self, message: impl fmt::Display) {
        self.current().print(message);
    }

    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.current().printf(args);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.current().warn(message);
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.current().warnf(args);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.current().error(message);
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.current().errorf(args);
    }

    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.current().fatal(message)
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.current().fatalf(args)
    }

    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.current().panic(message)
    }

    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.current().panicf(args)
    }
}

impl Default for LoggerProvider {
    fn default() -> Self {
        Self::new(Logger::console())
    }
}

impl fmt::Debug for LoggerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerProvider")
            .field("current", &*self.current.read())
            .finish()
    }
}

static DEFAULT_PROVIDER: Lazy<LoggerProvider> = Lazy::new(LoggerProvider::default);

/// Process-wide provider behind the crate-level logging functions.
///
/// Built on first use with a colored console handle at threshold `Trace`.
pub fn default_provider() -> &'static LoggerProvider {
    &DEFAULT_PROVIDER
}

/// Replace the process-wide default handle; returns the previous one.
pub fn reset_default(logger: Logger) -> Arc<Logger> {
    default_provider().reset(logger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::BufferAppender;

    #[test]
    fn test_reset_routes_through_new_handle() {
        let old_buf = BufferAppender::new();
        let new_buf = BufferAppender::new();
        let provider = LoggerProvider::new(
            Logger::builder()
                .min_level(LogLevel::Warn)
                .appender(old_buf.clone())
                .build(),
        );

        provider.debug("before");
        assert!(old_buf.is_empty());

        let previous = provider.reset(
            Logger::builder()
                .min_level(LogLevel::Debug)
                .appender(new_buf.clone())
                .build(),
        );
        assert_eq!(previous.level(), Some(LogLevel::Warn));

        provider.debug("after");
        assert!(old_buf.is_empty());
        assert_eq!(new_buf.len(), 1);
    }

    #[test]
    fn test_set_level_targets_current_handle() {
        let buffer = BufferAppender::new();
        let provider = LoggerProvider::new(Logger::new(buffer.clone()));
        let held = provider.current();

        provider.set_level(LogLevel::Error);
        assert_eq!(held.level(), Some(LogLevel::Error));
        provider.warn("filtered");
        provider.errorf(format_args!("{} failures", 2));
        assert_eq!(buffer.len(), 1);
        assert_eq!(provider.level(), Some(LogLevel::Error));
    }

    #[test]
    fn test_held_snapshot_survives_reset() {
        let first = BufferAppender::new();
        let provider = LoggerProvider::new(Logger::new(first.clone()));
        let snapshot = provider.current();

        provider.reset(Logger::new(BufferAppender::new()));
        snapshot.info("late write");
        assert_eq!(first.len(), 1);
    }
}
