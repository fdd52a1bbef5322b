//! Points in time sampled from a specific clock.
//!
//! An [`Instant<C>`] stores the raw sample of clock `C` in the clock's native
//! representation. Instants of different clock types are distinct types, so
//! mixing them is rejected at compile time; only [`Duration`]s cross between
//! clock domains.
//!
//! Two clock values of the same type share one instant type. Instants taken
//! from two separate [`PauseableClock`](crate::PauseableClock)s over the same
//! base type are not kept apart by the compiler.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::clock::Clock;
use crate::duration::Duration;
use crate::period::Period;
use crate::rep::Rep;
use crate::ticks::{TickDuration, Ticks, try_exact_convert, truncating_convert};
use crate::types::ConversionError;

/// A timestamp in the domain of clock `C`.
///
/// With the `std` feature, `C` defaults to the monotonic
/// [`SteadyClock`](crate::SteadyClock).
#[cfg(feature = "std")]
pub struct Instant<C: Clock = crate::clock::SteadyClock> {
    sample: Ticks<C::Rep, C::Period>,
}

/// A timestamp in the domain of clock `C`.
#[cfg(not(feature = "std"))]
pub struct Instant<C: Clock> {
    sample: Ticks<C::Rep, C::Period>,
}

impl<C: Clock> Instant<C> {
    /// Captures the clock's current time.
    #[inline]
    pub fn now(clock: &C) -> Self {
        Self::from_sample(clock.now())
    }

    /// Wraps a raw clock sample.
    #[inline]
    pub const fn from_sample(sample: Ticks<C::Rep, C::Period>) -> Self {
        Self { sample }
    }

    /// Creates an instant at `since_epoch` after the clock's epoch, truncating
    /// toward zero if the clock's ticks are coarser.
    pub fn from_epoch<D: TickDuration>(since_epoch: D) -> Self {
        Self::from_sample(truncating_convert(since_epoch))
    }

    /// Creates an instant at `since_epoch` after the clock's epoch, only if it
    /// is representable exactly in the clock's ticks.
    ///
    /// # Errors
    /// Same as [`try_exact_convert`].
    pub fn try_from_epoch<D: TickDuration>(since_epoch: D) -> Result<Self, ConversionError> {
        try_exact_convert(since_epoch).map(Self::from_sample)
    }

    /// Returns the raw clock sample.
    #[inline]
    pub fn sample(&self) -> Ticks<C::Rep, C::Period> {
        self.sample
    }

    /// Returns the time between the clock's epoch and this instant.
    #[inline]
    pub fn time_since_epoch(&self) -> Duration {
        Duration::truncating_from(self.sample)
    }

    /// Returns the time passed on `clock` since this instant.
    ///
    /// Never negative for a steady clock. For other clocks the sign is
    /// meaningful: a clock that was set back reports a negative value.
    #[inline]
    pub fn elapsed(&self, clock: &C) -> Duration {
        Self::now(clock) - *self
    }

    /// Calculates the signed duration since an earlier instant.
    #[inline]
    pub fn duration_since(&self, earlier: Self) -> Duration {
        *self - earlier
    }
}

impl<C: Clock> Clone for Instant<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock> Copy for Instant<C> {}

impl<C: Clock> core::fmt::Debug for Instant<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Instant")
            .field("sample", &self.sample.count())
            .finish()
    }
}

impl<C: Clock> PartialEq for Instant<C> {
    fn eq(&self, other: &Self) -> bool {
        self.sample == other.sample
    }
}

impl<C: Clock> Eq for Instant<C> where C::Rep: Eq {}

impl<C: Clock> PartialOrd for Instant<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.sample.partial_cmp(&other.sample)
    }
}

impl<C: Clock> Ord for Instant<C>
where
    C::Rep: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.sample.cmp(&other.sample)
    }
}

impl<C: Clock> Sub for Instant<C> {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::between(self.sample, rhs.sample)
    }
}

impl<C: Clock> Add<Duration> for Instant<C> {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self::from_epoch(self.time_since_epoch() + rhs)
    }
}

impl<C: Clock> Sub<Duration> for Instant<C> {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        Self::from_epoch(self.time_since_epoch() - rhs)
    }
}

impl<C: Clock> Add<Instant<C>> for Duration {
    type Output = Instant<C>;

    fn add(self, rhs: Instant<C>) -> Instant<C> {
        rhs + self
    }
}

impl<C: Clock, R: Rep, P: Period> Add<Ticks<R, P>> for Instant<C> {
    type Output = Self;

    fn add(self, rhs: Ticks<R, P>) -> Self {
        self + Duration::from(rhs)
    }
}

impl<C: Clock, R: Rep, P: Period> Sub<Ticks<R, P>> for Instant<C> {
    type Output = Self;

    fn sub(self, rhs: Ticks<R, P>) -> Self {
        self - Duration::from(rhs)
    }
}

impl<C: Clock> AddAssign<Duration> for Instant<C> {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl<C: Clock> SubAssign<Duration> for Instant<C> {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl<C: Clock, R: Rep, P: Period> AddAssign<Ticks<R, P>> for Instant<C> {
    fn add_assign(&mut self, rhs: Ticks<R, P>) {
        *self = *self + rhs;
    }
}

impl<C: Clock, R: Rep, P: Period> SubAssign<Ticks<R, P>> for Instant<C> {
    fn sub_assign(&mut self, rhs: Ticks<R, P>) {
        *self = *self - rhs;
    }
}
