//! Log records and line rendering

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};

/// One accepted log call, ready to be rendered.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub timestamp: Option<DateTime<Utc>>,
    pub call_site: Option<CallSite>,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: None,
            call_site: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }
}

/// Renders records into text lines (without the trailing newline, which
/// each appender adds when writing).
///
/// Line shapes:
///
/// ```text
/// [<timestamp>] <LEVEL>\t[<file>:<line>] <message>
/// <LEVEL>\t[<file>:<line>] <message>
/// [<timestamp>] <LEVEL>\t<message>
/// <LEVEL>\t<message>
/// ```
///
/// The angle brackets around the level are literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFormatter {
    timestamp_format: TimestampFormat,
}

impl LineFormatter {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn format(&self, record: &LogRecord) -> String {
        let mut line = String::with_capacity(record.message.len() + 48);

        if let Some(ref timestamp) = record.timestamp {
            line.push('[');
            line.push_str(&self.timestamp_format.format(timestamp));
            line.push_str("] ");
        }

        line.push('<');
        line.push_str(record.level.to_str());
        line.push_str(">\t");

        if let Some(ref site) = record.call_site {
            line.push('[');
            line.push_str(&site.to_string());
            line.push_str("] ");
        }

        line.push_str(&record.message);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn site() -> CallSite {
        CallSite {
            file: "server.rs".to_string(),
            line: 42,
            function: "anonymous".to_string(),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).single().unwrap()
    }

    #[test]
    fn test_bare_line() {
        let line = LineFormatter::default().format(&LogRecord::new(LogLevel::Info, "ready"));
        assert_eq!(line, "<INFO>\tready");
    }

    #[test]
    fn test_call_site_only() {
        let record = LogRecord::new(LogLevel::Warn, "slow").with_call_site(site());
        assert_eq!(LineFormatter::default().format(&record), "<WARN>\t[server.rs:42] slow");
    }

    #[test]
    fn test_timestamp_only() {
        let record = LogRecord::new(LogLevel::Debug, "tick").with_timestamp(stamp());
        assert_eq!(
            LineFormatter::default().format(&record),
            "[2025-01-08T10:30:45.000Z] <DEBUG>\ttick"
        );
    }

    #[test]
    fn test_timestamp_and_call_site() {
        let record = LogRecord::new(LogLevel::Error, "boom")
            .with_timestamp(stamp())
            .with_call_site(site());
        let formatter = LineFormatter::new(TimestampFormat::Custom("%H:%M:%S".to_string()));
        assert_eq!(formatter.format(&record), "[10:30:45] <ERROR>\t[server.rs:42] boom");
    }
}
