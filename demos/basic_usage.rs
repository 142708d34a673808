//! Basic logger usage example
//!
//! Demonstrates the crate-level functions, both message forms, and changing
//! the threshold at runtime.
//!
//! Run with: cargo run --example basic_usage

use zlogger::prelude::*;
use zlogger::{infof, sprint, warnf};

fn main() {
    println!("=== zlogger - Basic Usage Example ===\n");

    println!("1. Logging at different levels:");
    zlogger::trace("This is a trace message");
    zlogger::debug("This is a debug message");
    zlogger::info("This is an info message");
    zlogger::warn("This is a warning message");
    zlogger::error("This is an error message");

    println!("\n2. Plain and formatted forms:");
    let items = 3;
    zlogger::info(sprint!("processing ", items, " items"));
    infof!("processing {} items", items);
    warnf!("{} of {} items skipped", 1, items);

    println!("\n3. Logging with different minimum levels:");
    zlogger::set_level(LogLevel::Info);
    println!("   Minimum level set to INFO - trace and debug won't show:");
    zlogger::trace("Trace message (hidden)");
    zlogger::debug("Debug message (hidden)");
    zlogger::info("Info message (visible)");
    zlogger::warn("Warning message (visible)");

    println!("\n4. Structured fields:");
    zlogger::get_logger().log_with_context(
        LogLevel::Info,
        "request served",
        LogContext::new().with_field("status", 200).with_field("path", "/health"),
    );

    println!("\n=== Example completed successfully! ===");
}
