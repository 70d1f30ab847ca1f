//! Core logging types and traits

pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod payload;
pub mod registry;
pub mod sink;
pub mod threshold;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::MessageFormatter;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use payload::Payload;
pub use registry::{
    current_level, default_logger, for_module, global, init, set_level, set_level_rank,
    LoggingContext, DEFAULT_MODULE,
};
pub use sink::{Sink, SinkChannel};
pub use threshold::Threshold;
pub use timestamp::TimestampFormat;
