//! Crate-level logging functions
//!
//! Each function forwards to the handle currently installed in
//! [`default_provider`], so a [`reset_default`] is observed by every later call
//! no matter where it is made from.
//!
//! ```
//! zlogger::info("service up");
//! zlogger::infof(format_args!("listening on {}", 8080));
//! ```

use crate::core::{default_provider, LogLevel, Logger};
use std::fmt;
use std::sync::Arc;

pub use crate::core::reset_default;

/// The handle currently behind the crate-level functions.
pub fn get_logger() -> Arc<Logger> {
    default_provider().current()
}

pub fn set_level(level: LogLevel) {
    default_provider().set_level(level);
}

pub fn level() -> Option<LogLevel> {
    default_provider().level()
}

pub fn trace(message: impl fmt::Display) {
    default_provider().trace(message);
}

pub fn tracef(args: fmt::Arguments<'_>) {
    default_provider().tracef(args);
}

pub fn debug(message: impl fmt::Display) {
    default_provider().debug(message);
}

pub fn debugf(args: fmt::Arguments<'_>) {
    default_provider().debugf(args);
}

pub fn info(message: impl fmt::Display) {
    default_provider().info(message);
}

pub fn infof(args: fmt::Arguments<'_>) {
    default_provider().infof(args);
}

pub fn print(message: impl fmt::Display) {
    default_provider().print(message);
}

pub fn printf(args: fmt::Arguments<'_>) {
    default_provider().printf(args);
}

pub fn warn(message: impl fmt::Display) {
    default_provider().warn(message);
}

pub fn warnf(args: fmt::Arguments<'_>) {
    default_provider().warnf(args);
}

pub fn error(message: impl fmt::Display) {
    default_provider().error(message);
}

pub fn errorf(args: fmt::Arguments<'_>) {
    default_provider().errorf(args);
}

/// Log at `Fatal` and exit the process with status 1.
pub fn fatal(message: impl fmt::Display) -> ! {
    default_provider().fatal(message)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_provider().fatalf(args)
}

/// Log at `Panic` and panic with the message.
pub fn panic(message: impl fmt::Display) -> ! {
    default_provider().panic(message)
}

pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    default_provider().panicf(args)
}
