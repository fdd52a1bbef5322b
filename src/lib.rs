#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Duration`**: Signed 64-bit nanosecond count; the currency for all time arithmetic
//! - **`TickDuration`**: Trait for external durations described by a representation and a tick period
//! - **`Ticks`**: Generic external duration (`Ticks<i64, Milli>`, `Ticks<f64, Second>`, ...)
//! - **`Rep`** / **`Period`**: Tick count representation and tick length
//! - **`Clock`**: Trait to implement for your timing source
//! - **`Instant`**: A timestamp bound to one clock type
//! - **`PauseableClock`**: Wraps a clock so its time can be paused and resumed
//!
//! Conversions come in two flavors: [`try_exact_convert`] fails instead of
//! losing precision, [`truncating_convert`] always succeeds and rounds toward
//! zero. `From` conversions into [`Duration`] are truncating.

pub mod clock;
pub mod duration;
pub mod instant;
pub mod pauseable;
pub mod period;
pub mod rep;
pub mod ticks;
pub mod types;

pub use clock::Clock;
#[cfg(feature = "std")]
pub use clock::SteadyClock;
pub use duration::Duration;
pub use instant::Instant;
pub use pauseable::PauseableClock;
pub use period::{Hour, Micro, Milli, Minute, Nano, Period, Second};
pub use rep::Rep;
pub use ticks::{
    Hours, Microseconds, Milliseconds, MillisecondsF64, Minutes, MinutesF64, Nanoseconds, Seconds,
    SecondsF64, TickDuration, Ticks, is_lossless, try_exact_convert, truncating_convert,
};
pub use types::{ClockState, ConversionError};
