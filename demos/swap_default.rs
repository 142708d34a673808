//! Swapping the default logger
//!
//! Shows a derived handle with its own threshold, and replacing the handle
//! behind the crate-level functions.
//!
//! Run with: cargo run --example swap_default

use zlogger::prelude::*;

fn main() -> Result<()> {
    let quiet = zlogger::get_logger().with_level(LogLevel::Warn);
    quiet.debug("not shown: derived handle is at WARN");
    quiet.warn("shown through the derived handle");

    let config = LoggerConfig::from_json(r#"{ "level": "debug", "timestamp_format": "%H:%M:%S" }"#)?;
    let previous = zlogger::reset_default(config.build()?);
    previous.info("the previous handle still works for anyone holding it");

    zlogger::debug("default handle now uses the configured layout");

    let caught = std::panic::catch_unwind(|| zlogger::panic("recoverable panic-level message"));
    if caught.is_err() {
        zlogger::info("caught the panic-level interrupt");
    }

    Ok(())
}
