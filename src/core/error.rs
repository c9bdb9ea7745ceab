//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Level name that is not one of the known severities
    #[error("Unknown log level: '{name}'")]
    UnknownLevel { name: String },

    /// Timestamp pattern chrono cannot render
    #[error("Invalid timestamp format: '{format}'")]
    InvalidTimestampFormat { format: String },

    /// Console write failure
    #[error("Console write failed: {0}")]
    ConsoleWrite(#[source] std::io::Error),

    /// File append failure with path
    #[error("Failed to append log to '{path}': {message}")]
    FileAppend { path: String, message: String },

    /// Appender whose background writer is gone
    #[error("Appender '{name}' is closed")]
    AppenderClosed { name: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { name: name.into() }
    }

    pub fn invalid_timestamp_format(format: impl Into<String>) -> Self {
        LoggerError::InvalidTimestampFormat {
            format: format.into(),
        }
    }

    /// Create a file append error
    pub fn file_append(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppend {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn appender_closed(name: impl Into<String>) -> Self {
        LoggerError::AppenderClosed { name: name.into() }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
