//! # Console Enhancer
//!
//! Leveled logging with call-site attribution, ANSI styling per severity
//! and pluggable console and file appenders.
//!
//! ## Features
//!
//! - **Level filtering**: ERROR, WARN, INFO, DEBUG and TRACE against a
//!   single threshold
//! - **Call sites**: `[file.rs:42]` on every line, captured with
//!   `#[track_caller]`
//! - **Styling**: bold/colored console output, plain text in files
//! - **Background file output**: appends never block the caller
//!
//! ```
//! use console_enhancer::{install, info, LoggerConfig};
//!
//! let logger = install(&LoggerConfig::new().with_level("DEBUG")).unwrap();
//! info!(logger, "listening on %s:%d", "0.0.0.0", 8080).unwrap();
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
    pub use crate::core::{
        install, Appender, CallSite, CallSiteResolver, ErrorReporter, ErrorTrace, LocationResolver,
        LogArgument, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Result, StyleAttribute, StyleRegistry, TimestampFormat, UnknownResolver,
    };
}

pub use appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
pub use core::{
    install, Appender, CallSite, CallSiteResolver, ErrorReporter, ErrorTrace, LocationResolver,
    LogArgument, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    StyleAttribute, StyleRegistry, TimestampFormat, UnknownResolver,
};
