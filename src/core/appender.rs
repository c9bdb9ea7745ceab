//! Appender trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// An output sink. Receives every line that passed the level filter, in
/// registration order, as plain text without a trailing newline.
pub trait Appender: Send + Sync {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
