//! Core logger types and traits

pub mod appender;
pub mod call_site;
pub mod config;
pub mod error;
pub mod level_filter;
pub mod log_argument;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod style;
pub mod timestamp;

pub use appender::Appender;
pub use call_site::{CallSite, CallSiteResolver, LocationResolver, UnknownResolver};
pub use config::{LoggerConfig, DEFAULT_LOG_PATH};
pub use error::{LoggerError, Result};
pub use level_filter::LevelFilter;
pub use log_argument::{ErrorTrace, LogArgument};
pub use log_level::LogLevel;
pub use log_record::{LineFormatter, LogRecord};
pub use logger::{install, stderr_reporter, ErrorReporter, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use style::{StyleAttribute, StyleRegistry};
pub use timestamp::TimestampFormat;
