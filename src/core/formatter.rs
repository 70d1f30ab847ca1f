//! Deterministic message formatting
//!
//! Every log line takes the shape `[<timestamp>] [<LEVEL>] [<module>] <message>`
//! with the payload, when present, rendered after the message. Given the same
//! inputs and timestamp the output is identical, so `format_at` is the pure
//! core and `format` merely stamps the current wall-clock time on top of it.

use super::log_level::LogLevel;
use super::payload::Payload;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    timestamp_format: TimestampFormat,
}

impl MessageFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the default ISO 8601 timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Format a message stamped with the current UTC time
    #[must_use]
    pub fn format(
        &self,
        level: LogLevel,
        module: &str,
        message: &str,
        payload: Option<&Payload>,
    ) -> String {
        self.format_at(&Utc::now(), level, module, message, payload)
    }

    /// Format a message at an explicit instant. Pure and deterministic.
    #[must_use]
    pub fn format_at(
        &self,
        timestamp: &DateTime<Utc>,
        level: LogLevel,
        module: &str,
        message: &str,
        payload: Option<&Payload>,
    ) -> String {
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            self.timestamp_format.format(timestamp),
            level.to_str(),
            module,
            message
        );
        if let Some(payload) = payload {
            line.push_str(&payload.render());
        }
        line
    }
}
