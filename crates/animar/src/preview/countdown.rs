//! The countdown ticker.
//!
//! Rewrites the element's text once per second with the remaining time
//! broken into days, hours, minutes and seconds; once the target passes,
//! the display becomes the configured finished message and stays there.

use chrono::{DateTime, Utc};

use crate::timer::TimerSlot;

/// Display before the first tick fires.
pub const PLACEHOLDER: &str = "00d 00h 00m 00s";

/// Tick period. One second, like any clock.
pub const TICK_PERIOD_MS: f64 = 1000.0;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_SECOND: i64 = 1_000;

/// Break non-negative remaining milliseconds into `(days, hours, minutes,
/// seconds)`.
///
/// Each unit is computed from the remainder of the previous division, so
/// hours never re-count whole days, and so on down.
#[must_use]
pub fn breakdown(remaining_ms: i64) -> (i64, i64, i64, i64) {
    let remaining_ms = remaining_ms.max(0);
    let days = remaining_ms / MS_PER_DAY;
    let rest = remaining_ms % MS_PER_DAY;
    let hours = rest / MS_PER_HOUR;
    let rest = rest % MS_PER_HOUR;
    let minutes = rest / MS_PER_MINUTE;
    let seconds = (rest % MS_PER_MINUTE) / MS_PER_SECOND;
    (days, hours, minutes, seconds)
}

/// Format a breakdown the way the embed displays it.
#[must_use]
pub fn format_breakdown(remaining_ms: i64) -> String {
    let (d, h, m, s) = breakdown(remaining_ms);
    format!("{d}d {h}h {m}m {s}s")
}

/// Imperative once-per-second countdown display.
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    target_ms: i64,
    finished_message: String,
    display: String,
    finished: bool,
    slot: TimerSlot,
}

impl CountdownTicker {
    /// Build a ticker for a target instant and finished message.
    #[must_use]
    pub fn new(target: DateTime<Utc>, finished_message: &str) -> Self {
        Self {
            target_ms: target.timestamp_millis(),
            finished_message: finished_message.to_string(),
            display: PLACEHOLDER.to_string(),
            finished: false,
            slot: TimerSlot::new(),
        }
    }

    /// Restart from the placeholder and arm the one-second timer.
    pub fn start(&mut self, now_ms: u64) {
        self.finished = false;
        self.display = PLACEHOLDER.to_string();
        self.slot.arm(now_ms, TICK_PERIOD_MS);
    }

    /// Cancel the timer and return to the placeholder.
    pub fn reset(&mut self) {
        self.slot.cancel();
        self.finished = false;
        self.display = PLACEHOLDER.to_string();
    }

    /// Drive the ticker. Returns whether the display changed.
    ///
    /// Once finished, the display is the finished message and further ticks
    /// are no-ops.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.slot.fire_due(now_ms) == 0 {
            return false;
        }
        if self.finished {
            return false;
        }
        let remaining = self.target_ms - now_ms as i64;
        let next = if remaining < 0 {
            self.finished = true;
            self.slot.cancel();
            self.finished_message.clone()
        } else {
            format_breakdown(remaining)
        };
        if next == self.display {
            return false;
        }
        self.display = next;
        true
    }

    /// The current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the countdown has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
