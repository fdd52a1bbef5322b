//! Shared test infrastructure for pauseable-time integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use pauseable_time::{Clock, Duration, Milli, Nano, Ticks};

// ============================================================================
// Mock Clocks
// ============================================================================

/// Mock nanosecond clock with controllable time advancement
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: Duration) {
        self.now.set(self.now.get() + duration.as_nanos());
    }

    /// Move time backwards, as a wall clock being corrected would
    pub fn rewind(&self, duration: Duration) {
        self.now.set(self.now.get() - duration.as_nanos());
    }

    pub fn set_time(&self, since_epoch: Duration) {
        self.now.set(since_epoch.as_nanos());
    }
}

impl Clock for ManualClock {
    type Rep = i64;
    type Period = Nano;

    const IS_STEADY: bool = false;

    fn now(&self) -> Ticks<i64, Nano> {
        Ticks::new(self.now.get())
    }
}

/// Mock clock with unsigned millisecond ticks
#[derive(Debug, Default)]
pub struct MillisClock {
    now: Cell<u32>,
}

impl MillisClock {
    pub fn advance(&self, millis: u32) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for MillisClock {
    type Rep = u32;
    type Period = Milli;

    const IS_STEADY: bool = true;

    fn now(&self) -> Ticks<u32, Milli> {
        Ticks::new(self.now.get())
    }
}

/// Mock unsigned millisecond wall clock that can be corrected backwards
#[derive(Debug, Default)]
pub struct WallMillisClock {
    now: Cell<u32>,
}

impl WallMillisClock {
    pub fn set_time(&self, millis: u32) {
        self.now.set(millis);
    }
}

impl Clock for WallMillisClock {
    type Rep = u32;
    type Period = Milli;

    const IS_STEADY: bool = false;

    fn now(&self) -> Ticks<u32, Milli> {
        Ticks::new(self.now.get())
    }
}

/// Mock clock reporting fractional nanoseconds
#[derive(Debug, Default)]
pub struct FloatNanosClock {
    now: Cell<f64>,
}

impl FloatNanosClock {
    pub fn set_time(&self, nanos: f64) {
        self.now.set(nanos);
    }
}

impl Clock for FloatNanosClock {
    type Rep = f64;
    type Period = Nano;

    const IS_STEADY: bool = true;

    fn now(&self) -> Ticks<f64, Nano> {
        Ticks::new(self.now.get())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Allowed shortfall for sleep-based timing checks, in milliseconds
pub const MILLI_BIAS: i64 = 20;

/// Allowed overshoot for sleep-based timing checks; sleeps can run long on a busy host
pub const MILLI_SLACK: i64 = 50;

/// Asserts that `elapsed` is close to `expected_millis`
pub fn assert_near_millis(elapsed: Duration, expected_millis: i64) {
    let millis = elapsed.as_millis();
    assert!(
        millis >= expected_millis - MILLI_BIAS && millis <= expected_millis + MILLI_SLACK,
        "elapsed {}ms, expected {}ms (-{}ms/+{}ms)",
        millis,
        expected_millis,
        MILLI_BIAS,
        MILLI_SLACK
    );
}
