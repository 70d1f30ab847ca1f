//! Module-bound logger
//!
//! A logger carries nothing but its module name and a handle to the owning
//! context. The severity threshold is deliberately not copied at creation:
//! every call reads it live, so a later `set_level` affects all existing
//! loggers retroactively.

use super::log_level::LogLevel;
use super::payload::Payload;
use super::registry::ContextShared;
use std::fmt;
use std::sync::Arc;

pub struct Logger {
    module: String,
    shared: Arc<ContextShared>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("module", &self.module).finish()
    }
}

impl Logger {
    pub(crate) fn new(module: String, shared: Arc<ContextShared>) -> Self {
        Self { module, shared }
    }

    /// The module name this logger is bound to.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Log a message at an explicit level with an optional payload.
    ///
    /// Best effort by contract: a filtered-out call returns with no
    /// observable effect and nothing here ever reports an error.
    pub fn log(&self, level: LogLevel, message: &str, payload: Option<&Payload>) {
        if !self.shared.threshold.enables(level) {
            return;
        }
        let line = self
            .shared
            .formatter
            .format(level, &self.module, message, payload);
        self.shared.sink.write(level, &line);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, None);
    }

    pub fn error_with(&self, message: &str, payload: Payload) {
        self.log(LogLevel::Error, message, Some(&payload));
    }

    pub fn warn_with(&self, message: &str, payload: Payload) {
        self.log(LogLevel::Warn, message, Some(&payload));
    }

    pub fn info_with(&self, message: &str, payload: Payload) {
        self.log(LogLevel::Info, message, Some(&payload));
    }

    pub fn debug_with(&self, message: &str, payload: Payload) {
        self.log(LogLevel::Debug, message, Some(&payload));
    }

    pub fn trace_with(&self, message: &str, payload: Payload) {
        self.log(LogLevel::Trace, message, Some(&payload));
    }

    /// Begin a timing span keyed by `(module, label)`.
    ///
    /// Timing output is debug verbosity: when the threshold does not enable
    /// Debug this is a no-op, as is the matching `time_end`.
    pub fn time(&self, label: &str) {
        if !self.shared.threshold.enables(LogLevel::Debug) {
            return;
        }
        self.shared.sink.start_timer(&self.timer_key(label));
    }

    /// Close a timing span and report the elapsed duration.
    ///
    /// Calling this without a matching open `time` for the same label is
    /// tolerated; the sink decides how to report the missing start.
    pub fn time_end(&self, label: &str) {
        if !self.shared.threshold.enables(LogLevel::Debug) {
            return;
        }
        self.shared.sink.end_timer(&self.timer_key(label));
    }

    fn timer_key(&self, label: &str) -> String {
        format!("{}:{}", self.module, label)
    }
}
