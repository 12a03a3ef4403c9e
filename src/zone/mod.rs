//! Wrap-zone state
//!
//! The 32-bit counter range is split by its top bit into two zones. Each
//! zone has an epoch slot; readers trust the slot of the zone they sampled,
//! and the updater only ever writes the slot of the zone the counter is
//! *not* in. The two slots form a manually rotated double buffer.

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::clock::Timestamp64;
use crate::error::ClockError;

pub mod guard;
pub mod updater;

pub use guard::GuardBand;
pub use updater::ZoneUpdater;

/// Bit that selects the zone of a raw counter value
pub const ZONE_BIT: u32 = 1 << 31;

/// Number of counter ticks in one zone
pub const ZONE_WIDTH: u32 = 1 << 31;

/// One half of the 32-bit counter range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Zone {
    /// `0x0000_0000..=0x7FFF_FFFF`
    Low = 0,
    /// `0x8000_0000..=0xFFFF_FFFF`
    High = 1,
}

impl Zone {
    /// Zone of a raw counter value (its top bit)
    ///
    /// # Example
    /// ```rust
    /// use wrapzone::zone::Zone;
    /// assert_eq!(Zone::of(0x7FFF_FFFF), Zone::Low);
    /// assert_eq!(Zone::of(0x8000_0000), Zone::High);
    /// ```
    #[inline]
    pub const fn of(raw: u32) -> Self {
        if raw & ZONE_BIT == 0 {
            Zone::Low
        } else {
            Zone::High
        }
    }

    /// Slot index of this zone
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The opposite zone
    pub const fn other(self) -> Self {
        match self {
            Zone::Low => Zone::High,
            Zone::High => Zone::Low,
        }
    }

    /// Decodes a stored zone, rejecting anything outside `{0, 1}`
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Zone::Low),
            1 => Some(Zone::High),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Zone {
    type Error = ClockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Zone::from_u8(value).ok_or(ClockError::CorruptedUpdaterState { last_zone: value })
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Low => f.write_str("low"),
            Zone::High => f.write_str("high"),
        }
    }
}

/// The two epoch slots, indexed by [`Zone`]
///
/// Slot `z` holds the high word to use while the counter is in zone `z`.
/// Readers load a slot with acquire ordering; the single updater stores with
/// release ordering, and only into the slot of the inactive zone.
///
/// `WrapZones` is `const`-constructible so it can live in a `static`. Its
/// alignment is
/// [`ZONE_STATE_ALIGN`](crate::platform::constants::ZONE_STATE_ALIGN).
#[derive(Debug)]
#[cfg_attr(feature = "aurix", repr(align(32)))] // AURIX cache line
#[cfg_attr(feature = "stm32", repr(align(8)))] // both slots in one doubleword
#[cfg_attr(feature = "cortex-m", repr(align(8)))]
#[cfg_attr(feature = "riscv", repr(align(64)))] // RISC-V cache line
#[cfg_attr(
    not(any(
        feature = "aurix",
        feature = "stm32",
        feature = "cortex-m",
        feature = "riscv"
    )),
    repr(align(8))
)]
pub struct WrapZones {
    epochs: [AtomicU32; 2],
}

impl WrapZones {
    /// Creates the initial state: both epochs zero
    pub const fn new() -> Self {
        Self::with_epochs([0, 0])
    }

    /// Creates a state with explicit epochs
    ///
    /// Used to resume after a warm restart when the counter kept running,
    /// and to set up arbitrary states in tests.
    pub const fn with_epochs(epochs: [u32; 2]) -> Self {
        Self {
            epochs: [AtomicU32::new(epochs[0]), AtomicU32::new(epochs[1])],
        }
    }

    /// Loads the epoch of a zone
    #[inline]
    pub fn epoch(&self, zone: Zone) -> u32 {
        self.epochs[zone.index()].load(Ordering::Acquire)
    }

    /// Composes a timestamp for a counter sample
    ///
    /// This is the whole lock-free read: one slot load selected by the
    /// sample's top bit, then concatenation.
    #[inline]
    pub fn compose(&self, raw: u32) -> Timestamp64 {
        Timestamp64::from_parts(self.epoch(Zone::of(raw)), raw)
    }

    /// Copies both epochs
    ///
    /// The two loads are independent; a snapshot taken while the updater
    /// runs may mix old and new values.
    pub fn snapshot(&self) -> ZoneSnapshot {
        ZoneSnapshot {
            epochs: [self.epoch(Zone::Low), self.epoch(Zone::High)],
        }
    }

    /// Increments the epoch of `zone` and returns the new value
    ///
    /// Load and store are separate: only the single updater may call this,
    /// and only while `zone` is inactive.
    pub(crate) fn advance(&self, zone: Zone) -> u32 {
        let slot = &self.epochs[zone.index()];
        let next = slot.load(Ordering::Relaxed).wrapping_add(1);
        slot.store(next, Ordering::Release);
        next
    }
}

impl Default for WrapZones {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of both epoch slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneSnapshot {
    /// Epochs indexed by zone
    pub epochs: [u32; 2],
}

impl ZoneSnapshot {
    /// Epoch of a zone
    pub const fn epoch(&self, zone: Zone) -> u32 {
        self.epochs[zone.index()]
    }

    /// Zone whose guard band the updater last acted on, as implied by the epochs
    ///
    /// Equal epochs mean the low zone's band was the last one handled (this
    /// covers the initial state); the low slot running one ahead means the
    /// high zone's band was.
    pub const fn resume_zone(&self) -> Zone {
        if self.epochs[0] == self.epochs[1] {
            Zone::Low
        } else {
            Zone::High
        }
    }

    /// Restores a live state from this snapshot
    pub const fn restore(&self) -> WrapZones {
        WrapZones::with_epochs(self.epochs)
    }
}
