//! Per-level terminal colors
//!
//! Colors are rendered as raw ANSI escapes so output does not depend on
//! terminal detection. Every painted segment is reset-terminated on its own.

use super::log_level::LogLevel;
use colored::Color;
use std::fmt;

/// Escape sequence restoring the terminal's default attributes.
pub const RESET: &str = "\x1b[0m";

/// Terminal foreground color attached to a level for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCode(Color);

pub const DEFAULT_COLOR: ColorCode = ColorCode(Color::White);
pub const TIMESTAMP_COLOR: ColorCode = ColorCode(Color::BrightBlack);
pub const TRACE_COLOR: ColorCode = ColorCode(Color::White);
pub const DEBUG_COLOR: ColorCode = ColorCode(Color::Blue);
pub const INFO_COLOR: ColorCode = ColorCode(Color::Green);
pub const WARN_COLOR: ColorCode = ColorCode(Color::Yellow);
pub const ERROR_COLOR: ColorCode = ColorCode(Color::Red);
pub const FATAL_COLOR: ColorCode = ColorCode(Color::BrightRed);
pub const PANIC_COLOR: ColorCode = ColorCode(Color::BrightRed);

impl ColorCode {
    pub const fn new(color: Color) -> Self {
        Self(color)
    }

    pub fn color(&self) -> Color {
        self.0
    }

    /// ANSI escape selecting this foreground color, e.g. `"\x1b[32m"`.
    pub fn escape(&self) -> String {
        format!("\x1b[{}m", self.0.to_fg_str())
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

impl LogLevel {
    pub fn color_code(&self) -> ColorCode {
        color_for(*self)
    }
}

pub fn color_for(level: LogLevel) -> ColorCode {
    match level {
        LogLevel::Trace => TRACE_COLOR,
        LogLevel::Debug => DEBUG_COLOR,
        LogLevel::Info => INFO_COLOR,
        LogLevel::Warn => WARN_COLOR,
        LogLevel::Error => ERROR_COLOR,
        LogLevel::Fatal => FATAL_COLOR,
        LogLevel::Panic => PANIC_COLOR,
        LogLevel::NoLevel | LogLevel::Disabled => DEFAULT_COLOR,
    }
}

/// Color for a lower-case level label; unknown labels get [`DEFAULT_COLOR`].
pub fn color_for_label(label: &str) -> ColorCode {
    match label {
        "trace" => TRACE_COLOR,
        "debug" => DEBUG_COLOR,
        "info" => INFO_COLOR,
        "warn" => WARN_COLOR,
        "error" => ERROR_COLOR,
        "fatal" => FATAL_COLOR,
        "panic" => PANIC_COLOR,
        _ => DEFAULT_COLOR,
    }
}

/// `color + text + RESET`
pub fn colorize(color: ColorCode, text: &str) -> String {
    format!("{}{}{}", color.escape(), text, RESET)
}

/// `RESET + color + text + RESET`, so the segment neither inherits nor leaks color.
pub fn paint_segment(color: ColorCode, text: &str) -> String {
    format!("{}{}{}{}", RESET, color.escape(), text, RESET)
}

/// Remove SGR escape sequences (`ESC [ ... m`) from `text`.
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
