//! Logging context and logger registry
//!
//! A `LoggingContext` owns the three pieces of shared state the subsystem
//! has: one severity threshold, one sink, and the module-name registry.
//! Contexts are explicitly constructed, so tests get isolated instances; the
//! process-wide singleton at the bottom of this module is a convenience layer
//! over exactly the same type.

use super::error::{LoggerError, Result};
use super::formatter::MessageFormatter;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::sink::Sink;
use super::threshold::Threshold;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Module name of the pre-registered default logger
pub const DEFAULT_MODULE: &str = "app";

/// State shared between a context and every logger it has handed out
pub(crate) struct ContextShared {
    pub(crate) threshold: Threshold,
    pub(crate) sink: Arc<dyn Sink>,
    pub(crate) formatter: MessageFormatter,
}

pub struct LoggingContext {
    shared: Arc<ContextShared>,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggingContext {
    /// Create a context writing to `sink`, with the threshold at Info for
    /// production-like runs and Debug otherwise.
    #[must_use]
    pub fn new(is_production: bool, sink: Arc<dyn Sink>) -> Self {
        Self::with_formatter(is_production, sink, MessageFormatter::new())
    }

    /// Create a context with a non-default formatter.
    #[must_use]
    pub fn with_formatter(
        is_production: bool,
        sink: Arc<dyn Sink>,
        formatter: MessageFormatter,
    ) -> Self {
        let shared = Arc::new(ContextShared {
            threshold: Threshold::new(is_production),
            sink,
            formatter,
        });
        let ctx = Self {
            shared,
            loggers: RwLock::new(HashMap::new()),
        };
        // Pre-register the default logger so convenience call sites never
        // race on first creation.
        let default = Arc::new(Logger::new(
            DEFAULT_MODULE.to_string(),
            Arc::clone(&ctx.shared),
        ));
        ctx.loggers.write().insert(DEFAULT_MODULE.to_string(), default);
        ctx
    }

    /// Return the logger for `module`, creating it on first request.
    ///
    /// Repeated lookups for the same name return the same instance for the
    /// lifetime of the context. A blank name is rejected without touching the
    /// registry.
    pub fn for_module(&self, module: &str) -> Result<Arc<Logger>> {
        if module.trim().is_empty() {
            return Err(LoggerError::InvalidModuleName);
        }

        if let Some(logger) = self.loggers.read().get(module) {
            return Ok(Arc::clone(logger));
        }

        // Check-then-insert under the write lock so concurrent first
        // requests for the same name resolve to one instance.
        let mut loggers = self.loggers.write();
        let logger = loggers.entry(module.to_string()).or_insert_with(|| {
            Arc::new(Logger::new(module.to_string(), Arc::clone(&self.shared)))
        });
        Ok(Arc::clone(logger))
    }

    /// The pre-registered logger bound to [`DEFAULT_MODULE`].
    #[must_use]
    pub fn default_logger(&self) -> Arc<Logger> {
        Arc::clone(
            self.loggers
                .read()
                .get(DEFAULT_MODULE)
                .expect("default logger registered at construction"),
        )
    }

    /// Replace the shared threshold. Visible to every logger on its next call.
    pub fn set_level(&self, level: LogLevel) {
        self.shared.threshold.set(level);
    }

    /// Replace the shared threshold from a raw rank, rejecting out-of-range
    /// values and leaving the current threshold in force on failure.
    pub fn set_level_rank(&self, rank: u8) -> Result<()> {
        self.shared.threshold.set_rank(rank)
    }

    /// The currently active threshold.
    #[must_use]
    pub fn current_level(&self) -> LogLevel {
        self.shared.threshold.get()
    }

    /// Number of registered loggers, default included.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.loggers.read().len()
    }
}

// ---------------------------------------------------------------------------
// Process-wide singleton
// ---------------------------------------------------------------------------

static GLOBAL: OnceLock<LoggingContext> = OnceLock::new();

fn default_sink() -> Arc<dyn Sink> {
    #[cfg(feature = "console")]
    return Arc::new(crate::sinks::ConsoleSink::new());
    #[cfg(not(feature = "console"))]
    Arc::new(crate::sinks::MemorySink::new())
}

/// Initialize the process-wide context. Call once, at process start, before
/// any logger is used; later verbosity changes go through [`set_level`].
pub fn init(is_production: bool) -> Result<&'static LoggingContext> {
    let mut installed = false;
    let ctx = GLOBAL.get_or_init(|| {
        installed = true;
        LoggingContext::new(is_production, default_sink())
    });
    if installed {
        Ok(ctx)
    } else {
        Err(LoggerError::AlreadyInitialized)
    }
}

/// The process-wide context, lazily created in development mode (console
/// sink, Debug threshold) when [`init`] was never called.
pub fn global() -> &'static LoggingContext {
    GLOBAL.get_or_init(|| LoggingContext::new(false, default_sink()))
}

/// Registry entry point on the process-wide context.
pub fn for_module(module: &str) -> Result<Arc<Logger>> {
    global().for_module(module)
}

/// The process-wide default logger.
pub fn default_logger() -> Arc<Logger> {
    global().default_logger()
}

/// Adjust the process-wide threshold.
pub fn set_level(level: LogLevel) {
    global().set_level(level);
}

/// Adjust the process-wide threshold from a raw rank.
pub fn set_level_rank(rank: u8) -> Result<()> {
    global().set_level_rank(rank)
}

/// The process-wide threshold currently in force.
pub fn current_level() -> LogLevel {
    global().current_level()
}
