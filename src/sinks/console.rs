//! Console sink implementation
//!
//! Errors and warnings go to stderr, everything else to stdout, with the
//! level tag colorized per severity. The sink owns timer bookkeeping:
//! `start_timer` records an instant keyed by the caller's span key,
//! `end_timer` reports the elapsed time and clears it.

use crate::core::{LogLevel, Sink, SinkChannel};
use colored::Colorize;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;

pub struct ConsoleSink {
    use_colors: bool,
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_colors(true)
    }

    #[must_use]
    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Colorize the `[LEVEL]` tag of a formatted line per severity.
    fn colorize_level_tag(&self, level: LogLevel, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let tag = format!("[{}]", level.to_str());
        let colored_tag = tag.color(level.color_code()).to_string();
        text.replacen(&tag, &colored_tag, 1)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, level: LogLevel, text: &str) {
        let line = self.colorize_level_tag(level, text);
        match SinkChannel::for_level(level) {
            SinkChannel::Error | SinkChannel::Warn => eprintln!("{}", line),
            SinkChannel::Info => println!("{}", line),
        }
    }

    fn write_error(&self, text: &str) {
        eprintln!("{}", text);
    }

    fn write_warn(&self, text: &str) {
        eprintln!("{}", text);
    }

    fn write_info(&self, text: &str) {
        println!("{}", text);
    }

    fn start_timer(&self, key: &str) {
        self.timers.lock().insert(key.to_string(), Instant::now());
    }

    fn end_timer(&self, key: &str) {
        match self.timers.lock().remove(key) {
            Some(start) => {
                println!("{}: {:.3}ms", key, start.elapsed().as_secs_f64() * 1000.0);
            }
            None => {
                println!("{}: timer was not started", key);
            }
        }
    }
}
