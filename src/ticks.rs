//! External duration representations and the conversions between them.
//!
//! Any type that can report a tick count in some [`Rep`] and [`Period`]
//! implements [`TickDuration`] and converts to and from every other one,
//! including the canonical [`Duration`](crate::Duration). [`Ticks`] is the
//! crate's own generic implementation; `core::time::Duration` is supported as
//! an unsigned nanosecond count.

use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::{Add, Neg, Sub};

use crate::period::{Hour, Micro, Milli, Minute, Nano, Period, Ratio, Second};
use crate::rep::Rep;
use crate::types::ConversionError;

/// A duration described by a tick count of representation `Rep` and period `Period`.
pub trait TickDuration: Copy {
    /// Representation of the tick count.
    type Rep: Rep;

    /// Length of one tick.
    type Period: Period;

    /// Returns the number of ticks.
    fn count(&self) -> Self::Rep;

    /// Creates a duration from a number of ticks.
    fn from_count(count: Self::Rep) -> Self;
}

/// A tick count in representation `R` with period `P`.
///
/// Arithmetic between `Ticks` of the same type stays in `R`. Mixing with the
/// canonical [`Duration`](crate::Duration) goes through the promotion rules
/// documented there.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ticks<R, P> {
    count: R,
    period: PhantomData<P>,
}

/// Whole nanoseconds.
pub type Nanoseconds = Ticks<i64, Nano>;
/// Whole microseconds.
pub type Microseconds = Ticks<i64, Micro>;
/// Whole milliseconds.
pub type Milliseconds = Ticks<i64, Milli>;
/// Whole seconds.
pub type Seconds = Ticks<i64, Second>;
/// Whole minutes.
pub type Minutes = Ticks<i64, Minute>;
/// Whole hours.
pub type Hours = Ticks<i64, Hour>;
/// Fractional milliseconds.
pub type MillisecondsF64 = Ticks<f64, Milli>;
/// Fractional seconds.
pub type SecondsF64 = Ticks<f64, Second>;
/// Fractional minutes.
pub type MinutesF64 = Ticks<f64, Minute>;

impl<R: Rep, P: Period> Ticks<R, P> {
    /// Creates a tick count.
    #[inline]
    pub const fn new(count: R) -> Self {
        Self {
            count,
            period: PhantomData,
        }
    }

    /// Returns the number of ticks.
    #[inline]
    pub fn count(self) -> R {
        self.count
    }

    /// Adds in the widened representation, saturating at the range of `R`.
    pub fn saturating_add(self, rhs: Self) -> Self {
        if R::IS_FLOAT {
            Self::new(self.count + rhs.count)
        } else {
            Self::new(R::from_i128(self.count.to_i128() + rhs.count.to_i128()))
        }
    }

    /// Subtracts in the widened representation, saturating at the range of `R`.
    ///
    /// An unsigned count stops at zero instead of wrapping.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        if R::IS_FLOAT {
            Self::new(self.count - rhs.count)
        } else {
            Self::new(R::from_i128(self.count.to_i128() - rhs.count.to_i128()))
        }
    }
}

impl<R: Rep, P: Period> TickDuration for Ticks<R, P> {
    type Rep = R;
    type Period = P;

    #[inline]
    fn count(&self) -> R {
        self.count
    }

    #[inline]
    fn from_count(count: R) -> Self {
        Self::new(count)
    }
}

impl TickDuration for core::time::Duration {
    type Rep = u64;
    type Period = Nano;

    fn count(&self) -> u64 {
        u64::try_from(self.as_nanos()).unwrap_or(u64::MAX)
    }

    fn from_count(count: u64) -> Self {
        core::time::Duration::from_nanos(count)
    }
}

impl<R: Rep, P: Period> PartialEq for Ticks<R, P> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<R: Rep + Eq, P: Period> Eq for Ticks<R, P> {}

impl<R: Rep, P: Period> PartialOrd for Ticks<R, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.count.partial_cmp(&other.count)
    }
}

impl<R: Rep + Ord, P: Period> Ord for Ticks<R, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

impl<R: Rep, P: Period> Add for Ticks<R, P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.count + rhs.count)
    }
}

impl<R: Rep, P: Period> Sub for Ticks<R, P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.count - rhs.count)
    }
}

impl<R: Rep + Neg<Output = R>, P: Period> Neg for Ticks<R, P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

/// Whether converting `Src` into `Dst` can never discard precision.
///
/// True when the target is floating, or when the source is integral and one
/// source tick is a whole number of target ticks. Range is not considered;
/// [`try_exact_convert`] checks it at runtime.
pub const fn is_lossless<Src: TickDuration, Dst: TickDuration>() -> bool {
    <Dst::Rep as Rep>::IS_FLOAT
        || (!<Src::Rep as Rep>::IS_FLOAT
            && Ratio::conversion(Ratio::of::<Src::Period>(), Ratio::of::<Dst::Period>())
                .is_integral())
}

/// Converts `from` into `Dst` only if no precision is lost.
///
/// # Errors
/// * [`ConversionError::Lossy`] when [`is_lossless`] is false for the pair
/// * [`ConversionError::Overflow`] when the count does not fit `Dst::Rep`
pub fn try_exact_convert<Dst: TickDuration, Src: TickDuration>(
    from: Src,
) -> Result<Dst, ConversionError> {
    if !is_lossless::<Src, Dst>() {
        return Err(ConversionError::Lossy);
    }

    let factor = Ratio::conversion(Ratio::of::<Src::Period>(), Ratio::of::<Dst::Period>());
    if <Dst::Rep as Rep>::IS_FLOAT {
        let count = factor.scale_float(from.count().to_f64());
        return Ok(Dst::from_count(<Dst::Rep as Rep>::from_f64(count)));
    }

    let scaled = from
        .count()
        .to_i128()
        .checked_mul(factor.num as i128)
        .ok_or(ConversionError::Overflow)?;
    <Dst::Rep as Rep>::checked_from_i128(scaled)
        .map(Dst::from_count)
        .ok_or(ConversionError::Overflow)
}

/// Converts `from` into `Dst`, truncating toward zero.
///
/// The computation runs in `f64` when either side is floating and in `i128`
/// otherwise. Results outside the target's range saturate.
pub fn truncating_convert<Dst: TickDuration, Src: TickDuration>(from: Src) -> Dst {
    let factor = Ratio::conversion(Ratio::of::<Src::Period>(), Ratio::of::<Dst::Period>());
    let count = if <Src::Rep as Rep>::IS_FLOAT || <Dst::Rep as Rep>::IS_FLOAT {
        <Dst::Rep as Rep>::from_f64(factor.scale_float(from.count().to_f64()))
    } else {
        <Dst::Rep as Rep>::from_i128(factor.scale_int(from.count().to_i128()))
    };
    Dst::from_count(count)
}
