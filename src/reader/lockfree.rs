//! Lock-free timestamp reader
//!
//! A [`WrapClock`] bundles the counter, the zone slots and the guard band.
//! `now` is one counter read plus one slot load: no locks, no retries, no
//! branch on shared state, callable from any context at any priority.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::clock::Timestamp64;
use crate::error::{ClockError, ClockResult};
use crate::traits::{RawCounter, TimestampSource};
use crate::zone::{GuardBand, WrapZones, ZoneUpdater};

/// 64-bit clock built on a 32-bit free-running counter
///
/// # Staleness
///
/// If a caller stalls between its counter read and its slot load for longer
/// than [`GuardBand::max_reader_latency`], or if the updater misses a guard
/// band, the result is exactly one epoch (2^32 ticks) off. It never fails
/// and never panics; a stalled caller's next call is correct again.
///
/// # Example
/// ```rust
/// use wrapzone::prelude::*;
///
/// let counter = SyntheticCounter::new(0x8000_0000);
/// let clock = WrapClock::new(&counter);
/// assert_eq!(clock.now().value(), 0x8000_0000);
/// assert_eq!(clock.now().zone(), Zone::High);
/// ```
#[derive(Debug)]
pub struct WrapClock<C: RawCounter> {
    counter: C,
    zones: WrapZones,
    guard: GuardBand,
    updater_claimed: AtomicBool,
}

impl<C: RawCounter> WrapClock<C> {
    /// Creates a clock with the default guard band (top 1/16 of each zone)
    ///
    /// The updater must run once before the counter leaves the guard band it
    /// starts in; a clock created near the top of the high zone otherwise
    /// reads one epoch low after the wrap.
    pub const fn new(counter: C) -> Self {
        Self::with_guard(counter, GuardBand::DEFAULT)
    }

    /// Creates a clock with a specific guard band
    pub const fn with_guard(counter: C, guard: GuardBand) -> Self {
        Self::with_zones(counter, guard, WrapZones::new())
    }

    /// Creates a clock resuming from existing epochs
    ///
    /// The updater will infer its starting state from the epochs (see
    /// [`ZoneSnapshot::resume_zone`](crate::zone::ZoneSnapshot::resume_zone)).
    pub const fn with_zones(counter: C, guard: GuardBand, zones: WrapZones) -> Self {
        Self {
            counter,
            zones,
            guard,
            updater_claimed: AtomicBool::new(false),
        }
    }

    /// Current 64-bit timestamp
    #[inline]
    pub fn now(&self) -> Timestamp64 {
        let raw = self.counter.read();
        self.zones.compose(raw)
    }

    /// Hands out the clock's single updater
    ///
    /// The claim is recorded inside a critical section with plain loads and
    /// stores, so this works on cores without compare-and-swap.
    ///
    /// Call [`ZoneUpdater::update`] once right away: if the counter starts
    /// inside a guard band, that band has to be handled before the counter
    /// leaves it.
    ///
    /// # Errors
    /// [`ClockError::UpdaterAlreadyClaimed`] on every call after the first.
    pub fn updater(&self) -> ClockResult<ZoneUpdater<'_, C>> {
        let already_claimed = critical_section::with(|_| {
            let claimed = self.updater_claimed.load(Ordering::Relaxed);
            self.updater_claimed.store(true, Ordering::Relaxed);
            claimed
        });
        if already_claimed {
            warn!("zone updater requested twice");
            return Err(ClockError::UpdaterAlreadyClaimed);
        }
        Ok(ZoneUpdater::new(&self.counter, &self.zones, self.guard))
    }

    /// Epoch slots read by this clock
    pub fn zones(&self) -> &WrapZones {
        &self.zones
    }

    /// Underlying raw counter
    pub fn counter(&self) -> &C {
        &self.counter
    }

    /// Guard band used by this clock's updater
    pub fn guard(&self) -> GuardBand {
        self.guard
    }
}

impl<C: RawCounter> TimestampSource for WrapClock<C> {
    #[inline]
    fn now(&self) -> Timestamp64 {
        WrapClock::now(self)
    }
}
