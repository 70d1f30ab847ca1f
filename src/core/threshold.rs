//! Shared severity threshold
//!
//! One word-sized atomic per logging context holds the active minimum
//! severity rank. Every logger reads it live on every call, so a change is
//! visible to all existing and future loggers on their very next call.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug)]
pub struct Threshold {
    rank: AtomicU8,
}

impl Threshold {
    /// Create a threshold for the given environment: Info for production-like
    /// runs, Debug otherwise.
    #[must_use]
    pub fn new(is_production: bool) -> Self {
        let level = if is_production {
            LogLevel::Info
        } else {
            LogLevel::Debug
        };
        Self {
            rank: AtomicU8::new(level.rank()),
        }
    }

    /// Replace the current level. Takes effect on the next call of every logger.
    pub fn set(&self, level: LogLevel) {
        self.rank.store(level.rank(), Ordering::Relaxed);
    }

    /// Replace the current level from a raw rank.
    ///
    /// A rank outside the five defined severities is rejected and the
    /// previously valid threshold stays in force.
    pub fn set_rank(&self, rank: u8) -> Result<()> {
        let level = LogLevel::from_rank(rank).ok_or(LoggerError::InvalidLevel { rank })?;
        self.set(level);
        Ok(())
    }

    /// The currently active level.
    #[must_use]
    pub fn get(&self) -> LogLevel {
        // Only valid ranks are ever stored, so the fallback is unreachable in
        // practice; it keeps the read total without a panic path.
        LogLevel::from_rank(self.rank.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Whether a message at `level` passes the current threshold.
    #[must_use]
    pub fn enables(&self, level: LogLevel) -> bool {
        level.rank() <= self.rank.load(Ordering::Relaxed)
    }
}
