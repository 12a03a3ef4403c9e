//! Guard band arithmetic
//!
//! The guard band of a zone is its top `1/2^bits` slice: the values whose
//! `bits` bits just below the zone bit are all set. The updater only acts
//! there, which keeps it far away from any reader still looking at the
//! other zone.

use crate::config::ClockConfig;
use crate::error::{ClockError, ClockResult, ScheduleError};
use crate::zone::ZONE_WIDTH;

/// Width of the guard band, expressed as a number of counter bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GuardBand {
    bits: u8,
}

impl GuardBand {
    /// Widest supported band: one bit, the top half of each zone
    pub const MIN_BITS: u8 = 1;

    /// Narrowest supported band: 30 bits, the top two ticks of each zone
    pub const MAX_BITS: u8 = 30;

    /// Top 1/16 of each zone
    pub const DEFAULT: GuardBand = GuardBand { bits: 4 };

    /// Creates a guard band of `bits` bits
    ///
    /// # Example
    /// ```rust
    /// use wrapzone::zone::GuardBand;
    /// let guard = GuardBand::new(4)?;
    /// assert_eq!(guard.mask(), 0x7800_0000);
    /// assert!(GuardBand::new(0).is_err());
    /// # Ok::<(), wrapzone::error::ClockError>(())
    /// ```
    pub const fn new(bits: u8) -> ClockResult<Self> {
        if bits < Self::MIN_BITS || bits > Self::MAX_BITS {
            return Err(ClockError::InvalidGuardBand { bits });
        }
        Ok(Self { bits })
    }

    /// Guard band chosen by a configuration
    pub const fn from_config<C: ClockConfig>() -> ClockResult<Self> {
        Self::new(C::GUARD_BITS)
    }

    /// Widest band whose reader-side margin still covers `latency_ticks`
    ///
    /// A wider band means a slower updater is acceptable, but it also brings
    /// the slot writes closer to a stalled reader. This picks the fewest
    /// bits for which a reader stalled `latency_ticks` between its two
    /// accesses is still safe.
    pub fn for_reader_latency(latency_ticks: u32) -> ClockResult<Self> {
        let mut bits = Self::MIN_BITS;
        while bits <= Self::MAX_BITS {
            let guard = Self { bits };
            if latency_ticks <= guard.max_reader_latency() {
                return Ok(guard);
            }
            bits += 1;
        }
        Err(ScheduleError::ReaderLatencyTooLong {
            max_ticks: Self { bits: Self::MAX_BITS }.max_reader_latency(),
            actual_ticks: latency_ticks,
        }
        .into())
    }

    /// Number of guard bits
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// The `bits` bits immediately below the zone bit
    #[inline]
    pub const fn mask(&self) -> u32 {
        ((1u32 << self.bits) - 1) << (31 - self.bits)
    }

    /// True when `raw` lies in the guard band of its zone
    #[inline]
    pub const fn contains(&self, raw: u32) -> bool {
        raw & self.mask() == self.mask()
    }

    /// Lowest value of the guard band in the low zone
    pub const fn threshold(&self) -> u32 {
        self.mask()
    }

    /// Size of the guard band in ticks
    pub const fn width(&self) -> u32 {
        1 << (31 - self.bits)
    }

    /// Minimum updater calls per full 2^32-tick wrap
    ///
    /// Calls spaced at most one band width apart land in every band.
    pub const fn min_calls_per_wrap(&self) -> u32 {
        1 << (self.bits + 1)
    }

    /// Longest updater period that still lands in every band in time
    ///
    /// The store that follows the updater's sample must also finish before
    /// the band ends, so the updater's own latency is subtracted.
    pub const fn max_updater_period(&self, updater_latency_ticks: u32) -> u32 {
        self.width().saturating_sub(updater_latency_ticks)
    }

    /// Longest reader stall between its counter read and its slot load
    ///
    /// A slot is next written when the counter reaches the guard band of the
    /// other zone, at least `ZONE_WIDTH - width()` ticks after any sample in
    /// the slot's own zone.
    pub const fn max_reader_latency(&self) -> u32 {
        ZONE_WIDTH - self.width()
    }
}

impl TryFrom<u8> for GuardBand {
    type Error = ClockError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<GuardBand> for u8 {
    fn from(guard: GuardBand) -> Self {
        guard.bits
    }
}

impl Default for GuardBand {
    fn default() -> Self {
        Self::DEFAULT
    }
}
