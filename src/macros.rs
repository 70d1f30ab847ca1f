//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use modlog::prelude::*;
//! use modlog::info;
//!
//! let ctx = LoggingContext::new(false, std::sync::Arc::new(MemorySink::new()));
//! let logger = ctx.for_module("server").unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use modlog::prelude::*;
/// # let ctx = LoggingContext::new(false, std::sync::Arc::new(MemorySink::new()));
/// # let logger = ctx.for_module("server").unwrap();
/// use modlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, &format!($($arg)+), None)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LoggingContext, LogLevel};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    fn test_logger() -> (std::sync::Arc<crate::core::Logger>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let ctx = LoggingContext::new(false, Arc::clone(&sink) as Arc<dyn crate::core::Sink>);
        let logger = ctx.for_module("macros").unwrap();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = test_logger();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        assert_eq!(sink.lines().len(), 2);
        assert!(sink.lines()[1].1.contains("Formatted: 42"));
    }

    #[test]
    fn test_severity_macros() {
        let (logger, sink) = test_logger();
        error!(logger, "Error code: {}", 500);
        warn!(logger, "Retry {} of {}", 1, 3);
        info!(logger, "Items: {}", 100);
        debug!(logger, "Count: {}", 5);
        assert_eq!(sink.lines().len(), 4);
    }

    #[test]
    fn test_trace_macro_respects_threshold() {
        let (logger, sink) = test_logger();
        // Development threshold is Debug, so trace is filtered
        trace!(logger, "hidden");
        assert!(sink.lines().is_empty());
    }
}
