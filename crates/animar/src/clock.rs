//! Time sources for the preview timers.
//!
//! The renderer never reads the wall clock itself; hosts pass milliseconds
//! from a [`Clock`] into every tick. [`FakeClock`] makes time-dependent
//! behavior (steppers, countdown, the copied flash) deterministic in tests.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// A monotonic-enough millisecond time source.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Controllable clock for deterministic tests.
#[derive(Debug, Default)]
pub struct FakeClock {
    current_ms: Cell<u64>,
}

impl FakeClock {
    /// Create a fake clock at the given instant.
    #[must_use]
    pub fn at(ms: u64) -> Self {
        Self {
            current_ms: Cell::new(ms),
        }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, ms: u64) {
        self.current_ms.set(ms);
    }

    /// Advance by a delta.
    pub fn advance(&self, delta_ms: u64) {
        self.current_ms.set(self.current_ms.get() + delta_ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.current_ms.get()
    }
}
