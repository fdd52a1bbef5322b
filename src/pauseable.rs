//! A clock whose time can be paused and resumed.
//!
//! [`PauseableClock`] wraps a base [`Clock`] and subtracts every closed pause
//! interval from the base time. While paused, [`Clock::now`] is frozen at the
//! moment the pause began, so elapsed times measured against it only count
//! running intervals.
//!
//! Bookkeeping runs in the base clock's widened representation, so a
//! non-steady unsigned base that is set back saturates at zero instead
//! of underflowing.
//!
//! Each instance is an independent pause domain. State lives in
//! [`Cell`](core::cell::Cell)s, so the clock is `!Sync` and cannot be shared
//! across threads.

use core::cell::Cell;

use crate::clock::Clock;
use crate::duration::Duration;
use crate::ticks::Ticks;
use crate::types::ClockState;

/// A clock that can be paused, wrapping a base clock `B`.
pub struct PauseableClock<B: Clock> {
    base: B,
    state: Cell<ClockState>,
    pause_start: Cell<Ticks<B::Rep, B::Period>>,
    total_paused: Cell<Ticks<B::Rep, B::Period>>,
}

impl<B: Clock> PauseableClock<B> {
    /// Creates a running clock with no accumulated pause time.
    pub fn new(base: B) -> Self {
        Self {
            base,
            state: Cell::new(ClockState::Running),
            pause_start: Cell::new(Ticks::default()),
            total_paused: Cell::new(Ticks::default()),
        }
    }

    /// Returns the wrapped base clock.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Returns the current state of the clock.
    pub fn state(&self) -> ClockState {
        self.state.get()
    }

    /// Returns true if the clock is currently paused.
    pub fn is_paused(&self) -> bool {
        self.state.get() == ClockState::Paused
    }

    /// Freezes the clock at the current base time.
    ///
    /// Does nothing if already paused.
    pub fn pause(&self) {
        if self.is_paused() {
            return;
        }

        self.pause_start.set(self.base.now());
        self.state.set(ClockState::Paused);

        #[cfg(feature = "defmt")]
        defmt::debug!("clock paused");
    }

    /// Resumes the clock, excluding the paused interval from its time.
    ///
    /// Does nothing if already running.
    pub fn resume(&self) {
        if !self.is_paused() {
            return;
        }

        let paused_for = self.base.now().saturating_sub(self.pause_start.get());
        self.total_paused
            .set(self.total_paused.get().saturating_add(paused_for));
        self.state.set(ClockState::Running);

        #[cfg(feature = "defmt")]
        defmt::debug!("clock resumed");
    }

    /// Returns the combined length of all closed pause intervals.
    pub fn total_paused(&self) -> Duration {
        Duration::truncating_from(self.total_paused.get())
    }

    /// Returns the length of the pause in progress, or zero while running.
    pub fn current_pause(&self) -> Duration {
        match self.state.get() {
            ClockState::Running => Duration::ZERO,
            ClockState::Paused => Duration::between(self.base.now(), self.pause_start.get()),
        }
    }
}

#[cfg(feature = "std")]
impl PauseableClock<crate::clock::SteadyClock> {
    /// Creates a pauseable clock over the process-wide steady clock.
    pub fn steady() -> Self {
        Self::new(crate::clock::SteadyClock)
    }
}

impl<B: Clock> Clock for PauseableClock<B> {
    type Rep = B::Rep;
    type Period = B::Period;

    const IS_STEADY: bool = false;

    fn now(&self) -> Ticks<B::Rep, B::Period> {
        let reference = match self.state.get() {
            ClockState::Running => self.base.now(),
            ClockState::Paused => self.pause_start.get(),
        };
        reference.saturating_sub(self.total_paused.get())
    }
}

impl<B: Clock + Default> Default for PauseableClock<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: Clock + core::fmt::Debug> core::fmt::Debug for PauseableClock<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PauseableClock")
            .field("base", &self.base)
            .field("state", &self.state.get())
            .field("total_paused", &self.total_paused())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;
    use crate::period::Nano;

    // Mock base clock advanced by hand
    #[derive(Debug, Default)]
    struct TestClock {
        now: Cell<i64>,
    }

    impl TestClock {
        fn advance(&self, nanos: i64) {
            self.now.set(self.now.get() + nanos);
        }
    }

    impl Clock for TestClock {
        type Rep = i64;
        type Period = Nano;

        const IS_STEADY: bool = true;

        fn now(&self) -> Ticks<i64, Nano> {
            Ticks::new(self.now.get())
        }
    }

    #[test]
    fn starts_running_with_no_pause() {
        let clock = PauseableClock::<TestClock>::default();
        assert_eq!(clock.state(), ClockState::Running);
        assert!(!clock.is_paused());
        assert_eq!(clock.total_paused(), Duration::ZERO);
        assert_eq!(clock.current_pause(), Duration::ZERO);
    }

    #[test]
    fn running_clock_follows_base() {
        let clock = PauseableClock::new(TestClock::default());
        clock.base().advance(100);
        assert_eq!(clock.now().count(), 100);
    }

    #[test]
    fn paused_clock_is_frozen() {
        let clock = PauseableClock::new(TestClock::default());
        clock.base().advance(100);
        clock.pause();

        clock.base().advance(50);
        let first = clock.now();
        clock.base().advance(50);
        assert_eq!(clock.now(), first);
        assert_eq!(first.count(), 100);
        assert_eq!(clock.current_pause(), Duration::from_nanos(100));
    }

    #[test]
    fn resume_excludes_the_paused_interval() {
        let clock = PauseableClock::new(TestClock::default());
        clock.base().advance(100);
        clock.pause();
        clock.base().advance(40);
        clock.resume();

        assert_eq!(clock.total_paused(), Duration::from_nanos(40));
        assert_eq!(clock.now().count(), 100);

        clock.base().advance(10);
        assert_eq!(clock.now().count(), 110);
    }

    #[test]
    fn repeated_pause_keeps_first_start() {
        let clock = PauseableClock::new(TestClock::default());
        clock.pause();
        clock.base().advance(30);
        clock.pause();
        clock.base().advance(30);
        clock.resume();

        assert_eq!(clock.total_paused(), Duration::from_nanos(60));
    }

    #[test]
    fn repeated_resume_is_a_no_op() {
        let clock = PauseableClock::new(TestClock::default());
        clock.resume();
        clock.base().advance(30);
        clock.resume();

        assert_eq!(clock.total_paused(), Duration::ZERO);
        assert_eq!(clock.now().count(), 30);
    }

    #[test]
    fn instants_measure_running_time_only() {
        let clock = PauseableClock::new(TestClock::default());
        let start = Instant::now(&clock);

        clock.base().advance(200);
        clock.pause();
        clock.base().advance(200);
        clock.resume();
        clock.base().advance(200);

        assert_eq!(start.elapsed(&clock), Duration::from_nanos(400));
    }

    #[test]
    fn pauseable_clock_is_not_steady() {
        assert!(!<PauseableClock<TestClock> as Clock>::IS_STEADY);
    }
}
