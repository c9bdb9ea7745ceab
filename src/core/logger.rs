//! Logger facade: level gate, line rendering and appender fan-out

use super::{
    appender::Appender,
    call_site::{CallSiteResolver, LocationResolver},
    config::LoggerConfig,
    error::{LoggerError, Result},
    level_filter::LevelFilter,
    log_argument::{format_error_message, format_message, LogArgument},
    log_level::LogLevel,
    log_record::{LineFormatter, LogRecord},
    metrics::LoggerMetrics,
    style::StyleRegistry,
};
use crate::appenders::{ConsoleAppender, ConsoleTarget, FileAppender};
use chrono::Utc;
use parking_lot::Mutex;
use std::panic::Location;
use std::sync::Arc;

/// Receives the logger's own failure reports. It is never filtered or
/// styled.
pub type ErrorReporter = Arc<dyn Fn(&str) + Send + Sync>;

/// Reporter that writes straight to standard error.
pub fn stderr_reporter() -> ErrorReporter {
    Arc::new(|message: &str| eprintln!("{}", message))
}

/// Create a logger configured by `config`.
///
/// # Example
///
/// ```
/// use console_enhancer::{install, LoggerConfig};
///
/// let logger = install(&LoggerConfig::new().with_level("WARN")).unwrap();
/// logger.warn(&["disk at %d%%".into(), 91.into()]).unwrap();
/// logger.info(&["not shown".into()]).unwrap();
/// ```
pub fn install(config: &LoggerConfig) -> Result<Logger> {
    Logger::builder().config(config.clone()).build()
}

/// Leveled logger with call-site attribution.
///
/// Every accepted call becomes one line sent to each appender in
/// registration order. The console appender is always first; a file
/// appender follows when the configuration asks for one.
pub struct Logger {
    filter: LevelFilter,
    show_source_info: bool,
    include_timestamp: bool,
    path_replace: Option<String>,
    formatter: LineFormatter,
    resolver: Box<dyn CallSiteResolver>,
    console_target: ConsoleTarget,
    styles: StyleRegistry,
    appenders: Mutex<Vec<Box<dyn Appender>>>,
    reporter: ErrorReporter,
    metrics: Arc<LoggerMetrics>,
    config: LoggerConfig,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("filter", &self.filter)
            .field("show_source_info", &self.show_source_info)
            .field("include_timestamp", &self.include_timestamp)
            .field("path_replace", &self.path_replace)
            .field("formatter", &self.formatter)
            .field("styles", &self.styles)
            .field("metrics", &self.metrics)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Logger with the pre-installation defaults: threshold ALL, call sites
    /// shown, no timestamps, styled console output only.
    #[must_use]
    pub fn new() -> Self {
        let styles = StyleRegistry::default();
        let console = ConsoleAppender::new().with_styles(styles.clone());

        Self {
            filter: LevelFilter::default(),
            show_source_info: true,
            include_timestamp: false,
            path_replace: None,
            formatter: LineFormatter::default(),
            resolver: Box::new(LocationResolver),
            console_target: ConsoleTarget::Stderr,
            styles,
            appenders: Mutex::new(vec![Box::new(console)]),
            reporter: stderr_reporter(),
            metrics: Arc::new(LoggerMetrics::new()),
            config: LoggerConfig::default(),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Apply `config`.
    ///
    /// The appender list is rebuilt from a fresh console appender, so
    /// appenders registered through [`add_appender`](Self::add_appender)
    /// and any previous file appender are dropped. An unknown level name
    /// keeps the current threshold. A timestamp pattern chrono cannot
    /// render is rejected and leaves the logger unchanged.
    pub fn install(&mut self, config: &LoggerConfig) -> Result<()> {
        config.timestamp_format.validate()?;

        let mut appenders: Vec<Box<dyn Appender>> = vec![Box::new(
            ConsoleAppender::with_colors(config.colors)
                .with_styles(self.styles.clone())
                .with_target(self.console_target.clone()),
        )];

        if config.file {
            let file = FileAppender::with_failure_callback(
                config.effective_filepath(),
                self.file_failure_callback(),
            )?;
            appenders.push(Box::new(file));
        }

        self.filter.configure(config.level.as_deref());
        self.show_source_info = config
            .show_source_info
            .unwrap_or(self.filter.threshold() != LogLevel::Error);
        self.include_timestamp = config.include_date;
        self.path_replace = config.strip_pattern().map(str::to_string);
        self.formatter = LineFormatter::new(config.timestamp_format.clone());
        *self.appenders.get_mut() = appenders;
        self.config = config.clone();
        Ok(())
    }

    fn file_failure_callback(&self) -> Arc<dyn Fn(&LoggerError) + Send + Sync> {
        let reporter = Arc::clone(&self.reporter);
        let metrics = Arc::clone(&self.metrics);
        Arc::new(move |err: &LoggerError| {
            metrics.record_file_write_failure();
            reporter(&format!("[LOGGER ERROR] {}", err));
        })
    }

    /// Register another sink after the configured ones.
    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.appenders.get_mut().push(appender);
    }

    pub fn threshold(&self) -> LogLevel {
        self.filter.threshold()
    }

    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        self.filter.should_emit(level)
    }

    pub fn shows_source_info(&self) -> bool {
        self.show_source_info
    }

    pub fn includes_timestamp(&self) -> bool {
        self.include_timestamp
    }

    /// Configuration applied by the last [`install`](Self::install)
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .lock()
            .iter()
            .map(|appender| appender.name().to_string())
            .collect()
    }

    #[track_caller]
    pub fn error(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Error, Location::caller(), || format_error_message(args))
    }

    #[track_caller]
    pub fn warn(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Warn, Location::caller(), || format_message(args))
    }

    #[track_caller]
    pub fn info(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Info, Location::caller(), || format_message(args))
    }

    #[track_caller]
    pub fn debug(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Debug, Location::caller(), || format_message(args))
    }

    /// Same as [`debug`](Self::debug).
    #[track_caller]
    pub fn log(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Debug, Location::caller(), || format_message(args))
    }

    /// TRACE-level entry point.
    #[track_caller]
    pub fn verbose(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Trace, Location::caller(), || format_message(args))
    }

    /// Same as [`verbose`](Self::verbose).
    #[track_caller]
    pub fn trace(&self, args: &[LogArgument]) -> Result<()> {
        self.emit(LogLevel::Trace, Location::caller(), || format_message(args))
    }

    fn emit(
        &self,
        level: LogLevel,
        caller: &Location<'_>,
        message: impl FnOnce() -> String,
    ) -> Result<()> {
        if !self.filter.should_emit(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let mut record = LogRecord::new(level, message());
        if self.include_timestamp {
            record = record.with_timestamp(Utc::now());
        }
        if self.show_source_info {
            let site = self.resolver.resolve(caller, self.path_replace.as_deref());
            record = record.with_call_site(site);
        }

        let line = self.formatter.format(&record);
        self.metrics.record_emitted();
        self.dispatch(level, &line)
    }

    /// Send `line` to every appender in registration order.
    ///
    /// Each appender is invoked even when an earlier one fails; the first
    /// error is returned.
    pub fn dispatch(&self, level: LogLevel, line: &str) -> Result<()> {
        let mut appenders = self.appenders.lock();
        let mut first_error = None;

        for appender in appenders.iter_mut() {
            if let Err(e) = appender.append(level, line) {
                self.metrics.record_append_failure();
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Flush every appender, waiting for queued file writes. Returns the
    /// first error, including file write failures observed since the last
    /// flush.
    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.lock();
        let mut first_error = None;

        for appender in appenders.iter_mut() {
            if let Err(e) = appender.flush() {
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an installed [`Logger`]
///
/// # Example
/// ```
/// use console_enhancer::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .config(LoggerConfig::new().with_level("INFO").with_include_date(true))
///     .resolver(UnknownResolver)
///     .error_reporter(Arc::new(|msg: &str| eprintln!("logger: {}", msg)))
///     .build()
///     .unwrap();
/// assert_eq!(logger.threshold(), LogLevel::Info);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    console_target: ConsoleTarget,
    styles: StyleRegistry,
    resolver: Option<Box<dyn CallSiteResolver>>,
    reporter: Option<ErrorReporter>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            console_target: ConsoleTarget::Stderr,
            styles: StyleRegistry::default(),
            resolver: None,
            reporter: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Send console output somewhere other than stderr
    #[must_use = "builder methods return a new value"]
    pub fn console_target(mut self, target: ConsoleTarget) -> Self {
        self.console_target = target;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn resolver<R: CallSiteResolver + 'static>(mut self, resolver: R) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Where file write failures are reported. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn error_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the logger and install the configuration.
    pub fn build(self) -> Result<Logger> {
        let mut logger = Logger::new();
        logger.console_target = self.console_target;
        logger.styles = self.styles;
        if let Some(resolver) = self.resolver {
            logger.resolver = resolver;
        }
        if let Some(reporter) = self.reporter {
            logger.reporter = reporter;
        }

        logger.install(&self.config)?;
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
