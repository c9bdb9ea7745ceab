//! Timestamp formats for the optional `[timestamp]` line prefix

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// How a record's timestamp is written.
///
/// # Examples
///
/// ```
/// use console_enhancer::core::TimestampFormat;
/// use chrono::Utc;
///
/// let stamp = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(stamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 with offset: `2025-01-08T10:30:45.123+00:00`
    Rfc3339,

    /// Any strftime-compatible format string
    Custom(String),
}

impl TimestampFormat {
    fn pattern(&self) -> &str {
        match self {
            TimestampFormat::Iso8601 => ISO8601,
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            TimestampFormat::Rfc3339 => "%Y-%m-%dT%H:%M:%S%.3f%:z",
            TimestampFormat::Custom(format_str) => format_str,
        }
    }

    /// Reject custom patterns chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(self.pattern()).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_timestamp_format(self.pattern()));
        }
        Ok(())
    }

    /// Render `datetime`. A pattern chrono cannot render falls back to
    /// [`Iso8601`](TimestampFormat::Iso8601).
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        let mut out = String::new();
        if write!(out, "{}", datetime.format(self.pattern())).is_err() {
            out.clear();
            // The fixed ISO pattern always renders
            let _ = write!(out, "{}", datetime.format(ISO8601));
        }
        out
    }
}
