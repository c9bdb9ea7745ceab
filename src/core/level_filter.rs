//! Severity threshold

use super::log_level::LogLevel;

/// Single ordered threshold deciding which calls reach the appenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelFilter {
    threshold: LogLevel,
}

impl LevelFilter {
    pub fn new(threshold: LogLevel) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Emit when the level is at least as severe as the threshold.
    #[inline]
    pub fn should_emit(&self, level: LogLevel) -> bool {
        level.ordinal() <= self.threshold.ordinal()
    }

    /// Set the threshold from a level name.
    ///
    /// Unknown or absent names keep the current threshold; nothing is
    /// reported. Returns whether the threshold was replaced.
    pub fn configure(&mut self, name: Option<&str>) -> bool {
        match name.map(str::parse::<LogLevel>) {
            Some(Ok(level)) => {
                self.threshold = level;
                true
            }
            _ => false,
        }
    }
}
