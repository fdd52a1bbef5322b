//! Clock abstraction for platform-agnostic timing.

use crate::period::Period;
use crate::rep::Rep;
use crate::ticks::Ticks;

/// Trait for abstracting time sources.
///
/// A clock reports the time elapsed since its own epoch as a tick count in its
/// native representation and period. Instants sampled from different clock
/// types never mix.
pub trait Clock {
    /// Representation of the clock's samples.
    type Rep: Rep;

    /// Tick period of the clock's samples.
    type Period: Period;

    /// Whether consecutive samples can never decrease.
    const IS_STEADY: bool;

    /// Returns the current time since the clock's epoch.
    fn now(&self) -> Ticks<Self::Rep, Self::Period>;
}

/// Monotonic clock backed by `std::time::Instant`.
///
/// The epoch is the first time any `SteadyClock` is read in this process.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyClock;

#[cfg(feature = "std")]
impl Clock for SteadyClock {
    type Rep = i64;
    type Period = crate::period::Nano;

    const IS_STEADY: bool = true;

    fn now(&self) -> Ticks<i64, crate::period::Nano> {
        static EPOCH: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

        let epoch = EPOCH.get_or_init(std::time::Instant::now);
        let nanos = i64::try_from(epoch.elapsed().as_nanos()).unwrap_or(i64::MAX);
        Ticks::new(nanos)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn steady_clock_never_goes_backwards() {
        let clock = SteadyClock;
        let first = clock.now();
        let second = clock.now();
        assert!(first <= second);
        assert!(first.count() >= 0);
    }
}
