//! Sink capability consumed by loggers
//!
//! The core emits fully formatted lines; how a sink renders or persists them
//! is its own concern. Severity routing is fixed: errors go to the error
//! channel, warnings to the warn channel, everything else to the info channel.
//! Timer bookkeeping (start instants, elapsed reporting) also lives behind
//! this boundary.

use super::log_level::LogLevel;

/// Output channel a formatted line is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkChannel {
    Error,
    Warn,
    Info,
}

impl SinkChannel {
    /// The conventional channel for a severity.
    #[must_use]
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => SinkChannel::Error,
            LogLevel::Warn => SinkChannel::Warn,
            LogLevel::Info | LogLevel::Debug | LogLevel::Trace => SinkChannel::Info,
        }
    }
}

pub trait Sink: Send + Sync {
    fn write_error(&self, text: &str);
    fn write_warn(&self, text: &str);
    fn write_info(&self, text: &str);

    /// Record the start of a timing span for `key`.
    fn start_timer(&self, key: &str);

    /// Report the elapsed time for `key` and clear it. A key without a
    /// matching start is not an error; the sink decides what to report.
    fn end_timer(&self, key: &str);

    /// Route a formatted line to the conventional channel for its severity.
    fn write(&self, level: LogLevel, text: &str) {
        match SinkChannel::for_level(level) {
            SinkChannel::Error => self.write_error(text),
            SinkChannel::Warn => self.write_warn(text),
            SinkChannel::Info => self.write_info(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_routing() {
        assert_eq!(SinkChannel::for_level(LogLevel::Error), SinkChannel::Error);
        assert_eq!(SinkChannel::for_level(LogLevel::Warn), SinkChannel::Warn);
        assert_eq!(SinkChannel::for_level(LogLevel::Info), SinkChannel::Info);
        assert_eq!(SinkChannel::for_level(LogLevel::Debug), SinkChannel::Info);
        assert_eq!(SinkChannel::for_level(LogLevel::Trace), SinkChannel::Info);
    }
}
