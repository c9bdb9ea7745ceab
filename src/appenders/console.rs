//! Console appender implementation

use crate::core::{Appender, LogLevel, LoggerError, Result, StyleRegistry};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Where the console appender writes.
#[derive(Clone, Default)]
pub enum ConsoleTarget {
    /// The process's standard error stream
    #[default]
    Stderr,
    /// A shared writer, e.g. an in-memory buffer for capturing output
    Shared(Arc<Mutex<dyn Write + Send>>),
}

impl fmt::Debug for ConsoleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleTarget::Stderr => f.write_str("Stderr"),
            ConsoleTarget::Shared(_) => f.write_str("Shared(..)"),
        }
    }
}

/// Writes each line to the console, wrapped in the level's ANSI style.
/// Write failures are returned to the caller.
pub struct ConsoleAppender {
    use_colors: bool,
    styles: StyleRegistry,
    target: ConsoleTarget,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            styles: StyleRegistry::default(),
            target: ConsoleTarget::Stderr,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            ..Self::new()
        }
    }

    /// Replace the per-level style table
    ///
    /// # Example
    ///
    /// ```
    /// use console_enhancer::appenders::ConsoleAppender;
    /// use console_enhancer::core::{LogLevel, StyleAttribute, StyleRegistry};
    ///
    /// let styles = StyleRegistry::default()
    ///     .with_style(LogLevel::Info, vec![StyleAttribute::Underline]);
    /// let appender = ConsoleAppender::new().with_styles(styles);
    /// ```
    #[must_use]
    pub fn with_styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    fn render(&self, level: LogLevel, line: &str) -> String {
        if self.use_colors {
            self.styles.render(line, level)
        } else {
            line.to_string()
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, level: LogLevel, line: &str) -> Result<()> {
        let output = self.render(level, line);

        match self.target {
            ConsoleTarget::Stderr => {
                let mut stderr = std::io::stderr().lock();
                writeln!(stderr, "{}", output).map_err(LoggerError::ConsoleWrite)
            }
            ConsoleTarget::Shared(ref writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", output).map_err(LoggerError::ConsoleWrite)
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stderr => std::io::stderr().flush()?,
            ConsoleTarget::Shared(ref writer) => writer.lock().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (ConsoleTarget, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (ConsoleTarget::Shared(buffer.clone()), buffer)
    }

    fn contents(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().clone()).unwrap()
    }

    #[test]
    fn test_styled_line() {
        let (target, buffer) = capture();
        let mut appender = ConsoleAppender::new().with_target(target);

        appender.append(LogLevel::Error, "<ERROR>\tboom").unwrap();
        assert_eq!(contents(&buffer), "\x1b[31m\x1b[1m<ERROR>\tboom\x1b[0m\n");
    }

    #[test]
    fn test_plain_line_without_colors() {
        let (target, buffer) = capture();
        let mut appender = ConsoleAppender::with_colors(false).with_target(target);

        appender.append(LogLevel::Warn, "<WARN>\tcareful").unwrap();
        appender.flush().unwrap();
        assert_eq!(contents(&buffer), "<WARN>\tcareful\n");
    }

    #[test]
    fn test_write_failure_is_returned() {
        let mut appender = ConsoleAppender::new()
            .with_target(ConsoleTarget::Shared(Arc::new(Mutex::new(BrokenPipe))));

        let err = appender.append(LogLevel::Info, "lost").unwrap_err();
        assert!(matches!(err, LoggerError::ConsoleWrite(_)));
    }
}
