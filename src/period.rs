//! Tick periods expressed as compile-time fractions of one second.

/// Length of one tick, as the rational number of seconds `NUM / DEN`.
///
/// Implement this on a zero-sized marker to describe a custom unit. Both
/// constants must be non-zero.
pub trait Period: Copy + Default + core::fmt::Debug + 'static {
    /// Numerator of the tick length in seconds.
    const NUM: u64;
    /// Denominator of the tick length in seconds.
    const DEN: u64;
}

macro_rules! period {
    ($(#[$meta:meta])* $name:ident = $num:literal / $den:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub struct $name;

        impl Period for $name {
            const NUM: u64 = $num;
            const DEN: u64 = $den;
        }
    };
}

period!(
    /// One nanosecond.
    Nano = 1 / 1_000_000_000
);
period!(
    /// One microsecond.
    Micro = 1 / 1_000_000
);
period!(
    /// One millisecond.
    Milli = 1 / 1_000
);
period!(
    /// One second.
    Second = 1 / 1
);
period!(
    /// One minute.
    Minute = 60 / 1
);
period!(
    /// One hour.
    Hour = 3_600 / 1
);

/// A reduced fraction `num / den`, used for conversion factors between periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Ratio {
    pub(crate) num: u128,
    pub(crate) den: u128,
}

impl Ratio {
    pub(crate) const fn new(num: u128, den: u128) -> Self {
        let g = gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Length of one tick of `P`, in seconds.
    pub(crate) const fn of<P: Period>() -> Self {
        Self::new(P::NUM as u128, P::DEN as u128)
    }

    /// Factor that turns a count of `from` ticks into a count of `to` ticks.
    pub(crate) const fn conversion(from: Ratio, to: Ratio) -> Self {
        Self::new(from.num * to.den, from.den * to.num)
    }

    /// Longest period that both `a` and `b` are whole multiples of.
    pub(crate) const fn common(a: Ratio, b: Ratio) -> Self {
        Self::new(gcd(a.num, b.num), lcm(a.den, b.den))
    }

    #[inline]
    pub(crate) const fn is_integral(self) -> bool {
        self.den == 1
    }

    /// Multiplies an integral count by this factor, truncating toward zero.
    pub(crate) fn scale_int(self, count: i128) -> i128 {
        let num = self.num as i128;
        let den = self.den as i128;
        match (self.num, self.den) {
            (1, 1) => count,
            (_, 1) => count.saturating_mul(num),
            (1, _) => count / den,
            _ => count.saturating_mul(num) / den,
        }
    }

    /// Multiplies a floating count by this factor.
    pub(crate) fn scale_float(self, count: f64) -> f64 {
        let num = self.num as f64;
        let den = self.den as f64;
        match (self.num, self.den) {
            (1, 1) => count,
            (_, 1) => count * num,
            (1, _) => count / den,
            _ => count * num / den,
        }
    }
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

const fn lcm(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}
