//! Shared error and state types.

/// Reasons an exact duration conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// The source representation or period cannot be converted without
    /// discarding precision.
    Lossy,

    /// The converted count does not fit in the target representation.
    Overflow,
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionError::Lossy => {
                write!(
                    f,
                    "conversion would truncate (floating source or finer tick period)"
                )
            }
            ConversionError::Overflow => {
                write!(f, "converted count does not fit the target representation")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Run state of a [`PauseableClock`](crate::PauseableClock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockState {
    /// Time advances with the base clock.
    #[default]
    Running,
    /// Time is frozen at the moment the pause began.
    Paused,
}
