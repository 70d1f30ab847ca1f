//! In-memory capturing sink
//!
//! Records every line and timer event it receives, for tests and for hosts
//! that want to inspect log output programmatically. Timer spans measure real
//! elapsed time so paired events report a non-negative duration.

use crate::core::{Sink, SinkChannel};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A timer event observed by the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    /// Elapsed duration since the matching start
    Elapsed(Duration),
    /// `end_timer` with no matching open start
    NotStarted,
}

#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(SinkChannel, String)>>,
    timers: Mutex<HashMap<String, Instant>>,
    timer_events: Mutex<Vec<(TimerEvent, String)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<(SinkChannel, String)> {
        self.lines.lock().clone()
    }

    /// All timer events, in occurrence order, with their span keys.
    #[must_use]
    pub fn timer_events(&self) -> Vec<(TimerEvent, String)> {
        self.timer_events.lock().clone()
    }

    /// Drop all captured lines and timer events.
    pub fn clear(&self) {
        self.lines.lock().clear();
        self.timers.lock().clear();
        self.timer_events.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_error(&self, text: &str) {
        self.lines.lock().push((SinkChannel::Error, text.to_string()));
    }

    fn write_warn(&self, text: &str) {
        self.lines.lock().push((SinkChannel::Warn, text.to_string()));
    }

    fn write_info(&self, text: &str) {
        self.lines.lock().push((SinkChannel::Info, text.to_string()));
    }

    fn start_timer(&self, key: &str) {
        self.timers.lock().insert(key.to_string(), Instant::now());
        self.timer_events
            .lock()
            .push((TimerEvent::Started, key.to_string()));
    }

    fn end_timer(&self, key: &str) {
        let event = match self.timers.lock().remove(key) {
            Some(start) => TimerEvent::Elapsed(start.elapsed()),
            None => TimerEvent::NotStarted,
        };
        self.timer_events.lock().push((event, key.to_string()));
    }
}
