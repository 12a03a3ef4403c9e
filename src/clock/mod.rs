//! Clock value module
//!
//! This module provides the composed 64-bit timestamp produced by the readers.
//! The high word is the epoch (number of completed counter wraps), the low
//! word is the raw counter sample, untouched.

use core::time::Duration;

use crate::config::ClockConfig;
use crate::zone::Zone;

/// Composed 64-bit timestamp
///
/// `value = (epoch << 32) | raw`. Because the two halves occupy disjoint bits
/// the `or` is the same as an addition, and splitting the value back into
/// [`epoch`](Self::epoch) and [`raw`](Self::raw) is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp64 {
    /// Timestamp value in counter ticks
    pub value: u64,
}

impl Timestamp64 {
    /// Creates a new timestamp
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Creates a zero timestamp
    pub const fn zero() -> Self {
        Self { value: 0 }
    }

    /// Composes a timestamp from an epoch and a raw counter sample
    ///
    /// # Example
    /// ```rust
    /// use wrapzone::clock::Timestamp64;
    /// let ts = Timestamp64::from_parts(3, 0x8000_0001);
    /// assert_eq!(ts.value(), 0x3_8000_0001);
    /// ```
    #[inline]
    pub const fn from_parts(epoch: u32, raw: u32) -> Self {
        Self {
            value: ((epoch as u64) << 32) | raw as u64,
        }
    }

    /// Splits the timestamp into `(epoch, raw)`
    #[inline]
    pub const fn into_parts(self) -> (u32, u32) {
        (self.epoch(), self.raw())
    }

    /// Returns the timestamp value
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Returns the timestamp as u64
    pub const fn as_u64(&self) -> u64 {
        self.value
    }

    /// High 32 bits: completed counter wraps
    #[inline]
    pub const fn epoch(&self) -> u32 {
        (self.value >> 32) as u32
    }

    /// Low 32 bits: the raw counter sample
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.value as u32
    }

    /// Zone the raw counter was in when this timestamp was taken
    pub const fn zone(&self) -> Zone {
        Zone::of(self.raw())
    }

    /// Ticks elapsed since `earlier`, saturating at zero if `earlier` is later
    pub const fn ticks_since(&self, earlier: Timestamp64) -> u64 {
        self.value.saturating_sub(earlier.value)
    }

    /// Converts the tick count to a duration using the configured counter rate
    ///
    /// Returns [`Duration::ZERO`] for a config with a zero counter rate.
    pub fn as_duration<C: ClockConfig>(&self) -> Duration {
        ticks_to_duration(self.value, C::COUNTER_HZ)
    }
}

impl From<u64> for Timestamp64 {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Timestamp64> for u64 {
    fn from(ts: Timestamp64) -> Self {
        ts.value
    }
}

/// Converts a tick count at `hz` ticks per second into a [`Duration`]
///
/// A zero rate yields [`Duration::ZERO`].
pub fn ticks_to_duration(ticks: u64, hz: u32) -> Duration {
    if hz == 0 {
        return Duration::ZERO;
    }
    let hz = hz as u64;
    let secs = ticks / hz;
    // remainder < hz <= u32::MAX, so the product stays below 2^62
    let nanos = (ticks % hz) * 1_000_000_000 / hz;
    Duration::new(secs, nanos as u32)
}
