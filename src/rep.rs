//! Numeric representations for tick counts.

use core::ops::{Add, Sub};

/// Numeric type holding a count of ticks.
///
/// A representation is either integral or floating (`IS_FLOAT`). Conversions
/// between categories go through `i128` or `f64`; narrowing conversions
/// truncate toward zero and saturate at the target's range.
pub trait Rep:
    Copy + PartialOrd + Default + core::fmt::Debug + Add<Output = Self> + Sub<Output = Self>
{
    /// Whether this representation is a floating-point type.
    const IS_FLOAT: bool;

    /// Widens to `i128`, truncating any fractional part.
    fn to_i128(self) -> i128;

    /// Converts to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows from `i128`, saturating at the representable range.
    fn from_i128(value: i128) -> Self;

    /// Narrows from `f64`, truncating toward zero and saturating. NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Narrows from `i128`, or `None` when the value does not fit.
    fn checked_from_i128(value: i128) -> Option<Self>;
}

macro_rules! integral_rep {
    ($($t:ty),*) => {$(
        impl Rep for $t {
            const IS_FLOAT: bool = false;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn checked_from_i128(value: i128) -> Option<Self> {
                <$t>::try_from(value).ok()
            }
        }
    )*};
}

macro_rules! floating_rep {
    ($($t:ty),*) => {$(
        impl Rep for $t {
            const IS_FLOAT: bool = true;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn checked_from_i128(value: i128) -> Option<Self> {
                Some(value as $t)
            }
        }
    )*};
}

integral_rep!(i8, i16, i32, i64, u8, u16, u32, u64);
floating_rep!(f32, f64);
