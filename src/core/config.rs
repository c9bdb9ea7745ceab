//! Installation options
//!
//! Options can be built in code or read from JSON with camelCase keys:
//!
//! ```
//! use console_enhancer::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(
//!     r#"{ "level": "WARN", "includeDate": true, "pathReplace": ".rs" }"#,
//! ).unwrap();
//! assert_eq!(config.level.as_deref(), Some("WARN"));
//! assert!(config.include_date);
//! assert!(!config.file);
//! ```

use super::error::{LoggerError, Result};
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File written when file output is on and no path is given.
pub const DEFAULT_LOG_PATH: &str = "./logs/server.log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerConfig {
    /// Threshold name: ERROR, WARN, INFO, DEBUG, TRACE, VERBOSE or ALL.
    /// Unknown names leave the threshold as it was.
    pub level: Option<String>,
    /// Enable the file appender
    pub file: bool,
    /// Target of the file appender, [`DEFAULT_LOG_PATH`] when absent
    pub filepath: Option<PathBuf>,
    /// Prefix every line with a timestamp
    pub include_date: bool,
    /// Substring removed from call-site file names
    pub path_replace: Option<String>,
    /// Force call-site display on or off. When absent it is shown unless
    /// the threshold is ERROR.
    pub show_source_info: Option<bool>,
    /// ANSI styling on the console
    pub colors: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: false,
            filepath: None,
            include_date: false,
            path_replace: None,
            show_source_info: None,
            colors: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Enable file output to `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = true;
        self.filepath = Some(path.into());
        self
    }

    /// Enable file output to [`DEFAULT_LOG_PATH`] unless a path is set.
    #[must_use]
    pub fn with_default_file(mut self) -> Self {
        self.file = true;
        self
    }

    #[must_use]
    pub fn with_include_date(mut self, include: bool) -> Self {
        self.include_date = include;
        self
    }

    #[must_use]
    pub fn with_path_replace(mut self, pattern: impl Into<String>) -> Self {
        self.path_replace = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_show_source_info(mut self, show: bool) -> Self {
        self.show_source_info = Some(show);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Path the file appender writes to.
    pub fn effective_filepath(&self) -> PathBuf {
        self.filepath
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH))
    }

    /// Strip pattern, with an empty string treated as none.
    pub fn strip_pattern(&self) -> Option<&str> {
        self.path_replace.as_deref().filter(|s| !s.is_empty())
    }
}
