//! # Modlog
//!
//! A module-scoped, synchronous logging facility: subsystems obtain a named
//! logger from a process-wide registry, messages are filtered against a single
//! shared severity threshold, and output is routed through a pluggable sink.
//!
//! ## Features
//!
//! - **Named Loggers**: One logger per module name, created lazily and cached
//! - **Shared Threshold**: A single mutable severity floor observed live by
//!   every logger, existing and future
//! - **Timing Spans**: `time`/`time_end` pairs report elapsed durations at
//!   debug verbosity
//! - **Thread Safe**: Designed for concurrent environments
//!
//! ## Quick start
//!
//! ```
//! use modlog::prelude::*;
//! use std::sync::Arc;
//!
//! let ctx = LoggingContext::new(false, Arc::new(MemorySink::new()));
//! let logger = ctx.for_module("Mailer").unwrap();
//! logger.info("started");
//! logger.debug_with("queue state", serde_json::json!({"count": 3}).into());
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        current_level, default_logger, for_module, global, init, set_level, set_level_rank,
        LogLevel, Logger, LoggerError, LoggingContext, MessageFormatter, Payload, Result, Sink,
        SinkChannel, Threshold, TimestampFormat, DEFAULT_MODULE,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::MemorySink;
}

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::core::{
    current_level, default_logger, for_module, global, init, set_level, set_level_rank, LogLevel,
    Logger, LoggerError, LoggingContext, MessageFormatter, Payload, Result, Sink, SinkChannel,
    Threshold, TimestampFormat, DEFAULT_MODULE,
};
pub use crate::sinks::MemorySink;
