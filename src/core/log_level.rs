//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log message, ordered by rank.
///
/// `Trace` is the most verbose level and sits below `Debug`. `NoLevel` and
/// `Disabled` are sentinels ranked above `Panic`: a threshold of `Disabled`
/// suppresses every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
#[repr(i8)]
pub enum LogLevel {
    #[default]
    Trace = -1,
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
    Panic = 5,
    NoLevel = 6,
    Disabled = 7,
}

impl LogLevel {
    /// Every level, from most to least verbose.
    pub const ALL: [LogLevel; 9] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
        LogLevel::NoLevel,
        LogLevel::Disabled,
    ];

    #[inline]
    pub const fn rank(self) -> i8 {
        self as i8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
            LogLevel::Panic => "PANIC",
            LogLevel::NoLevel => "NOLEVEL",
            LogLevel::Disabled => "DISABLED",
        }
    }

    /// Lower-case label handed to the console level hook.
    ///
    /// `NoLevel` has an empty label, so its lines carry no level tag.
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
            LogLevel::Panic => "panic",
            LogLevel::NoLevel => "",
            LogLevel::Disabled => "disabled",
        }
    }

    /// Whether a message at `self` passes a threshold of raw rank `threshold`.
    ///
    /// Messages at `Disabled` never pass. Thresholds below `Trace` let
    /// everything through.
    #[inline]
    pub fn passes(self, threshold: i8) -> bool {
        self != LogLevel::Disabled && self.rank() >= threshold
    }

    /// Whether a message at `self` is emitted under `threshold`.
    #[inline]
    pub fn enabled_under(self, threshold: LogLevel) -> bool {
        self.passes(threshold.rank())
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            "PANIC" => Ok(LogLevel::Panic),
            "" | "NOLEVEL" => Ok(LogLevel::NoLevel),
            "DISABLED" | "OFF" => Ok(LogLevel::Disabled),
            _ => Err(LoggerError::parse_level(s)),
        }
    }
}

impl TryFrom<i8> for LogLevel {
    type Error = LoggerError;

    fn try_from(rank: i8) -> Result<Self, LoggerError> {
        LogLevel::ALL
            .iter()
            .copied()
            .find(|level| level.rank() == rank)
            .ok_or(LoggerError::InvalidLevel { rank })
    }
}

impl From<LogLevel> for i8 {
    fn from(level: LogLevel) -> Self {
        level.rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Panic < LogLevel::NoLevel);
        assert!(LogLevel::NoLevel < LogLevel::Disabled);
        assert_eq!(LogLevel::Trace.rank(), -1);
        assert_eq!(LogLevel::Disabled.rank(), 7);
    }

    #[test]
    fn test_gating() {
        assert!(LogLevel::Info.enabled_under(LogLevel::Info));
        assert!(LogLevel::Error.enabled_under(LogLevel::Info));
        assert!(!LogLevel::Debug.enabled_under(LogLevel::Info));
        assert!(LogLevel::Trace.enabled_under(LogLevel::Trace));
        assert!(!LogLevel::Panic.enabled_under(LogLevel::Disabled));
        assert!(!LogLevel::Disabled.enabled_under(LogLevel::Disabled));
        assert!(!LogLevel::Disabled.enabled_under(LogLevel::Trace));
    }

    #[test]
    fn test_below_trace_threshold_emits_everything() {
        for level in LogLevel::ALL.iter().filter(|l| **l != LogLevel::Disabled) {
            assert!(level.passes(-5), "{} should pass rank -5", level);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Disabled);
        assert_eq!("panic".parse::<LogLevel>().unwrap(), LogLevel::Panic);
        assert!(matches!(
            "verbose".parse::<LogLevel>(),
            Err(LoggerError::ParseLevel { .. })
        ));
    }

    #[test]
    fn test_try_from_rank() {
        assert_eq!(LogLevel::try_from(-1).unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::try_from(3).unwrap(), LogLevel::Error);
        assert!(matches!(
            LogLevel::try_from(-2),
            Err(LoggerError::InvalidLevel { rank: -2 })
        ));
        assert!(LogLevel::try_from(8).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Warn.label(), "warn");
        assert_eq!(LogLevel::NoLevel.label(), "");
        assert_eq!(LogLevel::Fatal.to_string(), "FATAL");
    }
}
