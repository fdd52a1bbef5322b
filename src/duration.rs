//! Canonical fixed-precision duration.
//!
//! [`Duration`] stores a signed 64-bit count of nanoseconds. Arithmetic between
//! two `Duration`s is exact. Arithmetic against an external [`TickDuration`]
//! promotes both operands to their common tick period, computes in the
//! operand's category (`i128` for integral counts, `f64` for floating ones) and
//! truncates the result back toward zero.
//!
//! Comparisons against an external duration first truncate it to whole
//! nanoseconds, so two values that differ below one nanosecond compare equal.
//!
//! Integer arithmetic on `Duration` itself follows `i64`: leaving the range of
//! roughly ±292 years panics in debug builds and wraps in release builds. Use
//! the `checked_*` methods where the range is not known in advance.

use core::cmp::Ordering;
use core::iter::Sum;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::period::{Nano, Period, Ratio, Second};
use crate::rep::Rep;
use crate::ticks::{TickDuration, Ticks, try_exact_convert, truncating_convert};
use crate::types::ConversionError;

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;
const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// A signed span of time with nanosecond precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    /// Zero duration constant.
    pub const ZERO: Self = Self::from_nanos(0);

    /// Longest representable duration.
    pub const MAX: Self = Self::from_nanos(i64::MAX);

    /// Most negative representable duration.
    pub const MIN: Self = Self::from_nanos(i64::MIN);

    /// Creates a duration from whole nanoseconds.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from whole microseconds.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Self::from_nanos(micros * NANOS_PER_MICRO)
    }

    /// Creates a duration from whole milliseconds.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self::from_nanos(millis * NANOS_PER_MILLI)
    }

    /// Creates a duration from whole seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self::from_nanos(secs * NANOS_PER_SEC)
    }

    /// Creates a duration from whole minutes.
    #[inline]
    pub const fn from_mins(mins: i64) -> Self {
        Self::from_nanos(mins * NANOS_PER_MIN)
    }

    /// Creates a duration from whole hours.
    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        Self::from_nanos(hours * NANOS_PER_HOUR)
    }

    /// Creates a duration from fractional seconds, truncating below one nanosecond.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::truncating_from(Ticks::<f64, Second>::new(secs))
    }

    /// Converts any external duration, truncating toward zero.
    ///
    /// Exact whenever [`is_lossless`](crate::is_lossless) holds for the
    /// source type and the value fits in `i64` nanoseconds.
    #[inline]
    pub fn truncating_from<D: TickDuration>(duration: D) -> Self {
        truncating_convert(duration)
    }

    /// Converts an external duration only if no precision is lost.
    ///
    /// # Errors
    /// * [`ConversionError::Lossy`] for floating counts or periods finer than a nanosecond
    /// * [`ConversionError::Overflow`] when the value exceeds the `i64` nanosecond range
    #[inline]
    pub fn try_exact_from<D: TickDuration>(duration: D) -> Result<Self, ConversionError> {
        try_exact_convert(duration)
    }

    /// Converts into any external duration type, truncating toward zero.
    #[inline]
    pub fn cast<T: TickDuration>(self) -> T {
        truncating_convert(self)
    }

    /// Converts to a `core::time::Duration`, or `None` if negative.
    pub fn to_std(self) -> Option<core::time::Duration> {
        u64::try_from(self.nanos)
            .ok()
            .map(core::time::Duration::from_nanos)
    }

    /// Returns the total number of nanoseconds.
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Returns the number of whole microseconds, truncated toward zero.
    #[inline]
    pub const fn as_micros(self) -> i64 {
        self.nanos / NANOS_PER_MICRO
    }

    /// Returns the number of whole milliseconds, truncated toward zero.
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.nanos / NANOS_PER_MILLI
    }

    /// Returns the number of whole seconds, truncated toward zero.
    #[inline]
    pub const fn as_secs(self) -> i64 {
        self.nanos / NANOS_PER_SEC
    }

    /// Returns the number of whole minutes, truncated toward zero.
    #[inline]
    pub const fn as_mins(self) -> i64 {
        self.nanos / NANOS_PER_MIN
    }

    /// Returns the number of whole hours, truncated toward zero.
    #[inline]
    pub const fn as_hours(self) -> i64 {
        self.nanos / NANOS_PER_HOUR
    }

    /// Returns the duration in nanoseconds as a float.
    #[inline]
    pub fn as_nanos_f64(self) -> f64 {
        self.nanos as f64
    }

    /// Returns the duration in fractional microseconds.
    #[inline]
    pub fn as_micros_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_MICRO as f64
    }

    /// Returns the duration in fractional milliseconds.
    #[inline]
    pub fn as_millis_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_MILLI as f64
    }

    /// Returns the duration in fractional seconds.
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_SEC as f64
    }

    /// Returns the duration in fractional minutes.
    #[inline]
    pub fn as_mins_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_MIN as f64
    }

    /// Returns the duration in fractional hours.
    #[inline]
    pub fn as_hours_f64(self) -> f64 {
        self.nanos as f64 / NANOS_PER_HOUR as f64
    }

    /// Returns true if the duration is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns true if the duration is below zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.nanos < 0
    }

    /// Returns the magnitude of the duration.
    #[inline]
    pub const fn abs(self) -> Self {
        Self::from_nanos(self.nanos.abs())
    }

    /// Adds two durations.
    #[inline]
    pub const fn plus(self, rhs: Self) -> Self {
        Self::from_nanos(self.nanos + rhs.nanos)
    }

    /// Subtracts `rhs` from `self`.
    #[inline]
    pub const fn minus(self, rhs: Self) -> Self {
        Self::from_nanos(self.nanos - rhs.nanos)
    }

    /// Multiplies by an integer, exactly.
    #[inline]
    pub const fn scale(self, factor: i64) -> Self {
        Self::from_nanos(self.nanos * factor)
    }

    /// Adds two durations, or `None` on overflow.
    #[inline]
    pub const fn checked_plus(self, rhs: Self) -> Option<Self> {
        match self.nanos.checked_add(rhs.nanos) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    /// Subtracts `rhs` from `self`, or `None` on overflow.
    #[inline]
    pub const fn checked_minus(self, rhs: Self) -> Option<Self> {
        match self.nanos.checked_sub(rhs.nanos) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    /// Multiplies by an integer, or `None` on overflow.
    #[inline]
    pub const fn checked_scale(self, factor: i64) -> Option<Self> {
        match self.nanos.checked_mul(factor) {
            Some(nanos) => Some(Self::from_nanos(nanos)),
            None => None,
        }
    }

    /// Multiplies by a float, truncating the product to whole nanoseconds.
    #[inline]
    pub fn scale_f64(self, factor: f64) -> Self {
        Self::from_nanos((self.nanos as f64 * factor) as i64)
    }

    /// Divides by an integer, truncating toward zero.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    #[inline]
    pub const fn div_scalar(self, divisor: i64) -> Self {
        Self::from_nanos(self.nanos / divisor)
    }

    /// Divides by a float, truncating the quotient to whole nanoseconds.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_scalar_f64(self, divisor: f64) -> Self {
        assert!(divisor != 0.0, "attempt to divide a duration by zero");
        Self::from_nanos((self.nanos as f64 / divisor) as i64)
    }

    /// Integer ratio of two durations, truncated toward zero.
    ///
    /// Use [`ratio_f64`](Self::ratio_f64) for a fractional ratio.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn div_ratio(self, rhs: Self) -> i64 {
        self.nanos / rhs.nanos
    }

    /// Fractional ratio of two durations.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn ratio_f64(self, rhs: Self) -> f64 {
        assert!(!rhs.is_zero(), "attempt to divide a duration by zero");
        self.nanos as f64 / rhs.nanos as f64
    }

    /// Remainder of truncating division; the sign follows `self`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    pub const fn remainder(self, rhs: Self) -> Self {
        Self::from_nanos(self.nanos % rhs.nanos)
    }

    /// Adds an external duration.
    pub fn plus_ticks<D: TickDuration>(self, rhs: D) -> Self {
        self.operands(rhs)
            .apply(|a, b| a + b, |a, b| a + b)
            .settle::<D::Period>()
    }

    /// Subtracts an external duration.
    pub fn minus_ticks<D: TickDuration>(self, rhs: D) -> Self {
        self.operands(rhs)
            .apply(|a, b| a - b, |a, b| a - b)
            .settle::<D::Period>()
    }

    /// Remainder against an external duration; the sign follows `self`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn remainder_ticks<D: TickDuration>(self, rhs: D) -> Self {
        assert_nonzero(rhs.count());
        self.operands(rhs)
            .apply(|a, b| a % b, |a, b| a % b)
            .settle::<D::Period>()
    }

    /// Ratio against an external duration, in the external representation.
    ///
    /// Integral representations truncate; floating ones keep the fraction.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    pub fn div_ticks<D: TickDuration>(self, rhs: D) -> D::Rep {
        assert_nonzero(rhs.count());
        self.operands(rhs)
            .apply(|a, b| a / b, |a, b| a / b)
            .into_rep()
    }

    /// Signed difference `later - earlier` of two counts of the same type.
    ///
    /// The subtraction runs in `i128` or `f64` before a single truncation to
    /// nanoseconds, so unsigned counts may go negative and sub-nanosecond
    /// fractions are not rounded twice.
    pub fn between<R: Rep, P: Period>(later: Ticks<R, P>, earlier: Ticks<R, P>) -> Self {
        let to_common = Ratio::conversion(Ratio::of::<P>(), common_period::<P>());
        let promoted = if R::IS_FLOAT {
            Promoted::Floating(
                to_common.scale_float(later.count().to_f64() - earlier.count().to_f64()),
            )
        } else {
            Promoted::Integral(
                to_common.scale_int(later.count().to_i128() - earlier.count().to_i128()),
            )
        };
        promoted.settle::<P>()
    }

    /// Expresses `self` and `other` as counts of their common period.
    fn operands<D: TickDuration>(self, other: D) -> Operands {
        let common = common_period::<D::Period>();
        let own = Ratio::conversion(Ratio::of::<Nano>(), common);
        let theirs = Ratio::conversion(Ratio::of::<D::Period>(), common);

        if <D::Rep as Rep>::IS_FLOAT {
            Operands::Floating(
                own.scale_float(self.nanos as f64),
                theirs.scale_float(other.count().to_f64()),
            )
        } else {
            Operands::Integral(
                own.scale_int(i128::from(self.nanos)),
                theirs.scale_int(other.count().to_i128()),
            )
        }
    }
}

/// A `Duration` and an external count, both in their common period.
enum Operands {
    Integral(i128, i128),
    Floating(f64, f64),
}

/// Result of an [`Operands`] computation, still in the common period.
enum Promoted {
    Integral(i128),
    Floating(f64),
}

impl Operands {
    fn swap(self) -> Self {
        match self {
            Operands::Integral(a, b) => Operands::Integral(b, a),
            Operands::Floating(a, b) => Operands::Floating(b, a),
        }
    }

    fn apply(self, integral: fn(i128, i128) -> i128, floating: fn(f64, f64) -> f64) -> Promoted {
        match self {
            Operands::Integral(a, b) => Promoted::Integral(integral(a, b)),
            Operands::Floating(a, b) => Promoted::Floating(floating(a, b)),
        }
    }
}

impl Promoted {
    /// Truncates a count of the common period of `Nano` and `P` to nanoseconds.
    fn settle<P: Period>(self) -> Duration {
        let factor = Ratio::conversion(common_period::<P>(), Ratio::of::<Nano>());
        let nanos = match self {
            Promoted::Integral(value) => <i64 as Rep>::from_i128(factor.scale_int(value)),
            Promoted::Floating(value) => <i64 as Rep>::from_f64(factor.scale_float(value)),
        };
        Duration::from_nanos(nanos)
    }

    /// Narrows a dimensionless ratio into `R`.
    fn into_rep<R: Rep>(self) -> R {
        match self {
            Promoted::Integral(value) => R::from_i128(value),
            Promoted::Floating(value) => R::from_f64(value),
        }
    }
}

fn common_period<P: Period>() -> Ratio {
    Ratio::common(Ratio::of::<Nano>(), Ratio::of::<P>())
}

fn assert_nonzero<R: Rep>(count: R) {
    assert!(count != R::default(), "attempt to divide a duration by zero");
}

impl TickDuration for Duration {
    type Rep = i64;
    type Period = Nano;

    #[inline]
    fn count(&self) -> i64 {
        self.nanos
    }

    #[inline]
    fn from_count(count: i64) -> Self {
        Self::from_nanos(count)
    }
}

impl<R: Rep, P: Period> From<Ticks<R, P>> for Duration {
    fn from(ticks: Ticks<R, P>) -> Self {
        Self::truncating_from(ticks)
    }
}

impl From<core::time::Duration> for Duration {
    fn from(duration: core::time::Duration) -> Self {
        Self::truncating_from(duration)
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_nanos(-self.nanos)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Rem for Duration {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.remainder(rhs)
    }
}

/// Integer ratio; see [`Duration::div_ratio`].
impl Div for Duration {
    type Output = i64;

    fn div(self, rhs: Self) -> i64 {
        self.div_ratio(rhs)
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale_f64(rhs)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs.scale(self)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Duration {
        rhs.scale_f64(self)
    }
}

impl Div<i64> for Duration {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        self.div_scalar(rhs)
    }
}

impl Div<f64> for Duration {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.div_scalar_f64(rhs)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.nanos += rhs.nanos;
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.nanos -= rhs.nanos;
    }
}

impl RemAssign for Duration {
    fn rem_assign(&mut self, rhs: Self) {
        self.nanos %= rhs.nanos;
    }
}

impl MulAssign<i64> for Duration {
    fn mul_assign(&mut self, rhs: i64) {
        self.nanos *= rhs;
    }
}

impl MulAssign<f64> for Duration {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale_f64(rhs);
    }
}

impl DivAssign<i64> for Duration {
    fn div_assign(&mut self, rhs: i64) {
        self.nanos /= rhs;
    }
}

impl DivAssign<f64> for Duration {
    fn div_assign(&mut self, rhs: f64) {
        *self = self.div_scalar_f64(rhs);
    }
}

impl<R: Rep, P: Period> Add<Ticks<R, P>> for Duration {
    type Output = Self;

    fn add(self, rhs: Ticks<R, P>) -> Self {
        self.plus_ticks(rhs)
    }
}

impl<R: Rep, P: Period> Sub<Ticks<R, P>> for Duration {
    type Output = Self;

    fn sub(self, rhs: Ticks<R, P>) -> Self {
        self.minus_ticks(rhs)
    }
}

impl<R: Rep, P: Period> Rem<Ticks<R, P>> for Duration {
    type Output = Self;

    fn rem(self, rhs: Ticks<R, P>) -> Self {
        self.remainder_ticks(rhs)
    }
}

impl<R: Rep, P: Period> Div<Ticks<R, P>> for Duration {
    type Output = R;

    fn div(self, rhs: Ticks<R, P>) -> R {
        self.div_ticks(rhs)
    }
}

impl<R: Rep, P: Period> AddAssign<Ticks<R, P>> for Duration {
    fn add_assign(&mut self, rhs: Ticks<R, P>) {
        *self = self.plus_ticks(rhs);
    }
}

impl<R: Rep, P: Period> SubAssign<Ticks<R, P>> for Duration {
    fn sub_assign(&mut self, rhs: Ticks<R, P>) {
        *self = self.minus_ticks(rhs);
    }
}

impl<R: Rep, P: Period> RemAssign<Ticks<R, P>> for Duration {
    fn rem_assign(&mut self, rhs: Ticks<R, P>) {
        *self = self.remainder_ticks(rhs);
    }
}

impl<R: Rep, P: Period> Add<Duration> for Ticks<R, P> {
    type Output = Duration;

    fn add(self, rhs: Duration) -> Duration {
        rhs.plus_ticks(self)
    }
}

impl<R: Rep, P: Period> Sub<Duration> for Ticks<R, P> {
    type Output = Duration;

    fn sub(self, rhs: Duration) -> Duration {
        rhs.operands(self)
            .swap()
            .apply(|a, b| a - b, |a, b| a - b)
            .settle::<P>()
    }
}

impl<R: Rep, P: Period> Rem<Duration> for Ticks<R, P> {
    type Output = Duration;

    fn rem(self, rhs: Duration) -> Duration {
        assert_nonzero(rhs.nanos);
        rhs.operands(self)
            .swap()
            .apply(|a, b| a % b, |a, b| a % b)
            .settle::<P>()
    }
}

impl<R: Rep, P: Period> Div<Duration> for Ticks<R, P> {
    type Output = R;

    fn div(self, rhs: Duration) -> R {
        assert_nonzero(rhs.nanos);
        rhs.operands(self)
            .swap()
            .apply(|a, b| a / b, |a, b| a / b)
            .into_rep()
    }
}

impl<R: Rep, P: Period> PartialEq<Ticks<R, P>> for Duration {
    fn eq(&self, other: &Ticks<R, P>) -> bool {
        *self == Duration::from(*other)
    }
}

impl<R: Rep, P: Period> PartialEq<Duration> for Ticks<R, P> {
    fn eq(&self, other: &Duration) -> bool {
        Duration::from(*self) == *other
    }
}

impl<R: Rep, P: Period> PartialOrd<Ticks<R, P>> for Duration {
    fn partial_cmp(&self, other: &Ticks<R, P>) -> Option<Ordering> {
        Some(self.cmp(&Duration::from(*other)))
    }
}

impl<R: Rep, P: Period> PartialOrd<Duration> for Ticks<R, P> {
    fn partial_cmp(&self, other: &Duration) -> Option<Ordering> {
        Some(Duration::from(*self).cmp(other))
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, Duration::plus)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Minute;
    use crate::ticks::{Milliseconds, Minutes, SecondsF64};

    #[derive(Debug, Clone, Copy, Default)]
    struct Pico;

    impl Period for Pico {
        const NUM: u64 = 1;
        const DEN: u64 = 1_000_000_000_000;
    }

    #[test]
    fn finer_operand_is_summed_before_truncation() {
        // 1000 ps + 1500 ps = 2500 ps, truncated to 2 ns
        let sum = Duration::from_nanos(1).plus_ticks(Ticks::<i64, Pico>::new(1_500));
        assert_eq!(sum.as_nanos(), 2);

        let exact = Duration::try_exact_from(Ticks::<i64, Pico>::new(1_000));
        assert_eq!(exact, Err(ConversionError::Lossy));
    }

    #[test]
    fn integral_operand_stays_integral() {
        let ratio: i64 = Duration::from_mins(5).div_ticks(Minutes::new(2));
        assert_eq!(ratio, 2);

        let rest = Duration::from_mins(5).remainder_ticks(Minutes::new(2));
        assert_eq!(rest, Duration::from_mins(1));
    }

    #[test]
    fn floating_operand_keeps_fraction_until_settled() {
        let ratio: f64 = Duration::from_mins(5).div_ticks(Ticks::<f64, Minute>::new(2.0));
        assert_eq!(ratio, 2.5);

        let sum = Duration::from_nanos(1).plus_ticks(SecondsF64::new(0.000_000_000_6));
        assert_eq!(sum.as_nanos(), 1);
    }

    #[test]
    fn swapped_operands_keep_their_order() {
        let diff = Milliseconds::new(500) - Duration::from_secs(2);
        assert_eq!(diff, Duration::from_millis(-1_500));

        let rest = Milliseconds::new(2_500) % Duration::from_secs(1);
        assert_eq!(rest, Duration::from_millis(500));
    }

    #[test]
    #[should_panic]
    fn floating_zero_divisor_panics() {
        let _ = Duration::from_secs(1) / 0.0;
    }

    #[test]
    #[should_panic]
    fn zero_ratio_panics() {
        let _ = Duration::from_secs(1) / Duration::ZERO;
    }
}
