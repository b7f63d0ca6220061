//! Monotonic time sources
//!
//! Timestamps are `Duration`s measured from an arbitrary per-clock origin, so
//! the same registry code runs on native targets (backed by
//! `std::time::Instant`) and in the browser (backed by `performance.now()`).

use std::time::Duration;

use parking_lot::Mutex;

/// A reading from a [`Clock`]
pub type Timestamp = Duration;

pub trait Clock: Send + Sync {
    /// Current monotonic time. Never decreases.
    fn now(&self) -> Timestamp;
}

/// Native monotonic clock
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clock for MonotonicClock {
    fn now(&self) -> Timestamp {
        self.origin.elapsed()
    }
}

/// Browser clock reading `window.performance.now()`.
///
/// Falls back to zero when no window is available (e.g. inside a worker
/// without `performance`), which freezes animations instead of panicking.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

#[cfg(target_arch = "wasm32")]
impl Clock for PerformanceClock {
    fn now(&self) -> Timestamp {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Duration::from_secs_f64(millis.max(0.0) / 1000.0)
    }
}

/// Clock that only moves when told to. Used for replays and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Mutex<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, now: Duration) {
        let mut current = self.now.lock();
        *current = (*current).max(now);
    }

    pub fn advance(&self, delta: Duration) {
        let mut current = self.now.lock();
        *current += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}

/// Default clock for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn system_clock() -> MonotonicClock {
    MonotonicClock::new()
}

#[cfg(target_arch = "wasm32")]
pub fn system_clock() -> PerformanceClock {
    PerformanceClock
}
