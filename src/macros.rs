//! Logging macros for ergonomic log message formatting.
//!
//! Two families:
//!
//! - handle macros (`info!(logger, ...)`) take a [`Logger`](crate::Logger) or
//!   [`LoggerProvider`](crate::LoggerProvider) first;
//! - global macros (`infof!(...)`) go through the process-wide default handle.
//!
//! # Examples
//!
//! ```
//! use zlogger::prelude::*;
//! use zlogger::{info, infof};
//!
//! let logger = Logger::new(BufferAppender::new());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! infof!("Server listening on port {}", port);
//! ```

/// Log a formatted message at a given level on a handle.
///
/// ```
/// # use zlogger::prelude::*;
/// # let logger = Logger::new(BufferAppender::new());
/// use zlogger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.logf($level, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $logger.tracef(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debugf(format_args!($($arg)+))
    };
}

/// Log an info-level message on a handle.
///
/// ```
/// # use zlogger::prelude::*;
/// # let logger = Logger::new(BufferAppender::new());
/// use zlogger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(format_args!($($arg)+))
    };
}

/// Log at fatal level on a handle, then exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}

/// Log at panic level on a handle, then panic with the message.
///
/// ```
/// # use zlogger::prelude::*;
/// # use std::panic::AssertUnwindSafe;
/// # let logger = Logger::new(BufferAppender::new());
/// use zlogger::panic_log;
/// let caught = std::panic::catch_unwind(AssertUnwindSafe(|| panic_log!(logger, "lost {}", 3)));
/// assert!(caught.is_err());
/// ```
#[macro_export]
macro_rules! panic_log {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! tracef {
    ($($arg:tt)+) => {
        $crate::tracef(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(format_args!($($arg)+))
    };
}

/// Log a formatted info-level message on the default handle.
///
/// ```
/// use zlogger::infof;
/// infof!("cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! printf {
    ($($arg:tt)+) => {
        $crate::printf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panicf(format_args!($($arg)+))
    };
}

/// Concatenate the `Display` output of every argument, without separators.
///
/// No space is ever inserted, even between two non-string operands:
/// `sprint!(1, 2)` is `"12"`. Put separators in the arguments where needed.
///
/// ```
/// use zlogger::sprint;
/// let user = "alice";
/// assert_eq!(sprint!("user=", user, " id=", 42), "user=alice id=42");
/// zlogger::info(sprint!("retries: ", 3));
/// ```
#[macro_export]
macro_rules! sprint {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        use ::std::fmt::Write as _;
        let mut out = ::std::string::String::new();
        $(
            let _ = ::std::write!(out, "{}", $arg);
        )+
        out
    }};
}
