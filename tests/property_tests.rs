//! Property-based tests for modlog using proptest

use modlog::{LoggingContext, LogLevel, MemorySink, Sink};
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
    ]
}

proptest! {
    /// Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let as_str = level.to_str();
        let parsed: LogLevel = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with numeric rank
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.rank() <= level2.rank());
        prop_assert_eq!(level1 < level2, level1.rank() < level2.rank());
    }

    /// Rank lookup is total over 0..=4 and rejects everything else
    #[test]
    fn test_from_rank(rank in any::<u8>()) {
        match LogLevel::from_rank(rank) {
            Some(level) => prop_assert_eq!(level.rank(), rank),
            None => prop_assert!(rank > 4),
        }
    }

    /// Filtering monotonicity: a call at severity `s` produces output iff
    /// rank(s) <= rank(threshold)
    #[test]
    fn test_filtering_monotonicity(severity in any_level(), threshold in any_level()) {
        let sink = Arc::new(MemorySink::new());
        let ctx = LoggingContext::new(true, Arc::clone(&sink) as Arc<dyn Sink>);
        ctx.set_level(threshold);

        let logger = ctx.for_module("prop").unwrap();
        logger.log(severity, "x", None);

        let expected = severity.rank() <= threshold.rank();
        prop_assert_eq!(!sink.lines().is_empty(), expected);
    }

    /// Formatted lines always carry the level name and module name in order
    #[test]
    fn test_formatted_line_shape(
        severity in any_level(),
        module in "[A-Za-z][A-Za-z0-9_]{0,15}",
        message in "[ -~]{0,40}",
    ) {
        let sink = Arc::new(MemorySink::new());
        let ctx = LoggingContext::new(false, Arc::clone(&sink) as Arc<dyn Sink>);
        ctx.set_level(LogLevel::Trace);

        let logger = ctx.for_module(&module).unwrap();
        logger.log(severity, &message, None);

        let lines = sink.lines();
        prop_assert_eq!(lines.len(), 1);
        let line = &lines[0].1;

        let level_tag = format!("[{}]", severity.to_str());
        let module_tag = format!("[{}]", module);
        let level_pos = line.find(&level_tag);
        prop_assert!(level_pos.is_some());
        // Module tag follows the level tag (names may collide with level names)
        let after_level = &line[level_pos.unwrap() + level_tag.len()..];
        prop_assert!(after_level.contains(&module_tag));
        prop_assert!(line.ends_with(&message));
    }

    /// Identity stability holds for arbitrary module names
    #[test]
    fn test_identity_stability(module in "[A-Za-z][A-Za-z0-9_]{0,15}") {
        let ctx = LoggingContext::new(false, Arc::new(MemorySink::new()));
        let first = ctx.for_module(&module).unwrap();
        let second = ctx.for_module(&module).unwrap();
        prop_assert!(Arc::ptr_eq(&first, &second));
    }
}
