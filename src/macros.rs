//! Logging macros taking printf-style arguments.
//!
//! Each argument goes through `LogArgument::from`, so strings, numbers,
//! booleans and JSON values can be passed directly. Errors are wrapped with
//! [`LogArgument::error`](crate::LogArgument::error). Every macro returns
//! the entry point's `Result`.
//!
//! # Examples
//!
//! ```
//! use console_enhancer::prelude::*;
//! use console_enhancer::{error, info};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "Server started").unwrap();
//! info!(logger, "User %s logged in from %s", "ada", "10.0.0.7").unwrap();
//!
//! let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.json missing");
//! error!(logger, "Could not load configuration", LogArgument::error(&err)).unwrap();
//! ```

/// Log an error-level message. An error argument in first or second
/// position is rendered with its cause chain.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.error(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.warn(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.info(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.debug(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Same as [`debug!`].
#[macro_export]
macro_rules! log {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.log(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.verbose(&[$($crate::LogArgument::from($arg)),+])
    };
}

/// Same as [`verbose!`].
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.trace(&[$($crate::LogArgument::from($arg)),+])
    };
}
