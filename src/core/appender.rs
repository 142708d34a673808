//! Output sink trait

use super::{error::Result, log_entry::LogEntry};
use parking_lot::Mutex;
use std::sync::Arc;

/// Destination for rendered log lines.
///
/// A handle serializes calls through [`SharedAppender`], so implementations
/// see one `append` at a time.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

/// Sink shared by a handle and every handle derived from it.
pub type SharedAppender = Arc<Mutex<Box<dyn Appender>>>;

pub fn shared<A: Appender + 'static>(appender: A) -> SharedAppender {
    let boxed: Box<dyn Appender> = Box::new(appender);
    Arc::new(Mutex::new(boxed))
}
