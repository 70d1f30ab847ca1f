//! Tests for the process-wide logging surface
//!
//! The singleton lives for the whole process, so the lifecycle is exercised
//! in a single test function; this file is its own test binary, which keeps
//! the global state isolated from the rest of the suite.

use modlog::{LoggerError, LogLevel, DEFAULT_MODULE};
use std::sync::Arc;

#[test]
fn test_process_wide_context_lifecycle() {
    // First initialization wins and sets the production threshold
    let ctx = modlog::init(true).expect("first initialization succeeds");
    assert_eq!(modlog::current_level(), LogLevel::Info);

    // A second init is rejected and changes nothing
    assert!(matches!(
        modlog::init(false),
        Err(LoggerError::AlreadyInitialized)
    ));
    assert_eq!(modlog::current_level(), LogLevel::Info);

    // global() hands back the installed context
    assert!(std::ptr::eq(modlog::global(), ctx));

    // The registry surface works through the free functions, with the same
    // identity stability as a local context
    let first = modlog::for_module("Mailer").unwrap();
    let second = modlog::for_module("Mailer").unwrap();
    assert!(Arc::ptr_eq(&first, &second));

    let default = modlog::default_logger();
    assert_eq!(default.module(), DEFAULT_MODULE);

    // Threshold control mirrors the context API
    modlog::set_level(LogLevel::Warn);
    assert_eq!(modlog::current_level(), LogLevel::Warn);

    assert_eq!(
        modlog::set_level_rank(99).unwrap_err(),
        LoggerError::InvalidLevel { rank: 99 }
    );
    assert_eq!(modlog::current_level(), LogLevel::Warn);
}
