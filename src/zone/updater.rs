//! Zone updater
//!
//! The only writer of [`WrapZones`]. Each call samples the counter itself;
//! when the sample is inside a guard band and its zone differs from the
//! last zone handled, the slot of the zone that was left gets incremented so
//! it is ready for the counter's next visit.

use crate::error::{ClockError, ClockResult};
use crate::traits::RawCounter;
use crate::zone::{GuardBand, WrapZones, Zone};

/// Single writer for a [`WrapZones`]
///
/// Obtained from [`WrapClock::updater`](crate::reader::WrapClock::updater),
/// which hands out at most one per clock. `update` takes `&mut self`, so the
/// updater cannot run concurrently with itself.
///
/// # Call-frequency contract
///
/// [`update`](Self::update) must run at least once per
/// [`GuardBand::width`] ticks (that is [`GuardBand::min_calls_per_wrap`]
/// times per wrap), and each call must finish its store before the band it
/// sampled ends. Nothing here detects a missed band: the symptom is readers
/// lagging by exactly one epoch from then on.
#[derive(Debug)]
pub struct ZoneUpdater<'a, C: RawCounter> {
    counter: &'a C,
    zones: &'a WrapZones,
    guard: GuardBand,
    /// Stored raw so a corrupted byte is observable instead of unrepresentable
    last_zone: u8,
    transitions: u32,
}

impl<'a, C: RawCounter> ZoneUpdater<'a, C> {
    pub(crate) fn new(counter: &'a C, zones: &'a WrapZones, guard: GuardBand) -> Self {
        let last_zone = zones.snapshot().resume_zone();
        debug!(
            "zone updater claimed: guard {} bits, resuming after {} zone",
            guard.bits(),
            last_zone.index() as u8
        );
        Self {
            counter,
            zones,
            guard,
            last_zone: last_zone as u8,
            transitions: 0,
        }
    }

    /// Runs one periodic update step
    ///
    /// # Errors
    /// [`ClockError::CorruptedUpdaterState`] when the stored last zone is not
    /// 0 or 1. The error is not recoverable: the slots are left untouched and
    /// the caller must halt or reset rather than keep producing timestamps.
    ///
    /// # Example
    /// ```rust
    /// use wrapzone::prelude::*;
    ///
    /// let counter = SyntheticCounter::new(0xF800_0000);
    /// let clock = WrapClock::new(&counter);
    /// let mut updater = clock.updater()?;
    ///
    /// updater.update()?;
    /// assert_eq!(clock.zones().epoch(Zone::Low), 1);
    /// # Ok::<(), wrapzone::error::ClockError>(())
    /// ```
    pub fn update(&mut self) -> ClockResult<()> {
        let last = match Zone::from_u8(self.last_zone) {
            Some(zone) => zone,
            None => {
                error!("zone updater state corrupted: last zone {}", self.last_zone);
                return Err(ClockError::CorruptedUpdaterState {
                    last_zone: self.last_zone,
                });
            }
        };

        let raw = self.counter.read();
        if !self.guard.contains(raw) {
            return Ok(());
        }

        let zone = Zone::of(raw);
        if zone != last {
            let epoch = self.zones.advance(last);
            self.last_zone = zone as u8;
            self.transitions = self.transitions.wrapping_add(1);
            trace!(
                "zone transition at {}: slot {} now epoch {}",
                raw,
                last.index() as u8,
                epoch
            );
        }
        Ok(())
    }

    /// Zone whose guard band was handled most recently
    pub fn last_zone(&self) -> ClockResult<Zone> {
        Zone::try_from(self.last_zone)
    }

    /// Guard band this updater acts in
    pub fn guard(&self) -> GuardBand {
        self.guard
    }

    /// Number of slot increments performed so far (wrapping)
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::SyntheticCounter;

    fn step(counter: &SyntheticCounter, updater: &mut ZoneUpdater<'_, SyntheticCounter>, raw: u32) {
        counter.set(raw);
        updater.update().unwrap();
    }

    #[test]
    fn test_no_op_outside_guard() {
        let counter = SyntheticCounter::new(0x8000_0000);
        let zones = WrapZones::new();
        let mut updater = ZoneUpdater::new(&counter, &zones, GuardBand::DEFAULT);

        for raw in [0x8000_0000, 0xF7FF_FFFF, 0x0000_0000, 0x77FF_FFFF] {
            step(&counter, &mut updater, raw);
        }
        assert_eq!(zones.snapshot().epochs, [0, 0]);
        assert_eq!(updater.transitions(), 0);
        assert_eq!(updater.last_zone(), Ok(Zone::Low));
    }

    #[test]
    fn test_alternating_transitions() {
        let counter = SyntheticCounter::new(0);
        let zones = WrapZones::new();
        let mut updater = ZoneUpdater::new(&counter, &zones, GuardBand::DEFAULT);

        // low band with last zone low: nothing to do
        step(&counter, &mut updater, 0x7900_0000);
        assert_eq!(zones.snapshot().epochs, [0, 0]);

        // high band: low slot prepared for the next visit
        step(&counter, &mut updater, 0xF900_0000);
        assert_eq!(zones.snapshot().epochs, [1, 0]);
        assert_eq!(updater.last_zone(), Ok(Zone::High));

        // repeated samples in the same band are idempotent
        step(&counter, &mut updater, 0xFFFF_FFFF);
        assert_eq!(zones.snapshot().epochs, [1, 0]);

        // low band after the wrap: high slot prepared
        step(&counter, &mut updater, 0x7800_0000);
        assert_eq!(zones.snapshot().epochs, [1, 1]);
        assert_eq!(updater.transitions(), 2);
    }

    #[test]
    fn test_only_inactive_slot_written() {
        let counter = SyntheticCounter::new(0);
        let zones = WrapZones::new();
        let mut updater = ZoneUpdater::new(&counter, &zones, GuardBand::DEFAULT);

        let mut raw = 0u32;
        for _ in 0..256 {
            raw = raw.wrapping_add(0x0400_0000);
            let before = zones.snapshot();
            step(&counter, &mut updater, raw);
            let active = Zone::of(raw);
            assert_eq!(zones.epoch(active), before.epoch(active));
        }
    }

    #[test]
    fn test_corrupted_state_is_fatal() {
        let counter = SyntheticCounter::new(0xF900_0000);
        let zones = WrapZones::new();
        let mut updater = ZoneUpdater::new(&counter, &zones, GuardBand::DEFAULT);
        updater.last_zone = 2;

        let err = updater.update().unwrap_err();
        assert_eq!(err, ClockError::CorruptedUpdaterState { last_zone: 2 });
        assert!(!err.is_recoverable());
        assert_eq!(zones.snapshot().epochs, [0, 0]);
        assert!(updater.last_zone().is_err());

        // stays fatal on every later call
        assert!(updater.update().is_err());
    }

    #[test]
    fn test_resumes_from_restored_epochs() {
        let counter = SyntheticCounter::new(0x1000_0000);
        let zones = WrapZones::with_epochs([6, 5]);
        let mut updater = ZoneUpdater::new(&counter, &zones, GuardBand::DEFAULT);
        assert_eq!(updater.last_zone(), Ok(Zone::High));

        step(&counter, &mut updater, 0x7C00_0000);
        assert_eq!(zones.snapshot().epochs, [6, 6]);
    }

    #[test]
    fn test_custom_guard() {
        let counter = SyntheticCounter::new(0);
        let zones = WrapZones::new();
        let guard = GuardBand::new(1).unwrap();
        let mut updater = ZoneUpdater::new(&counter, &zones, guard);

        step(&counter, &mut updater, 0xBFFF_FFFF);
        assert_eq!(zones.snapshot().epochs, [0, 0]);
        step(&counter, &mut updater, 0xC000_0000);
        assert_eq!(zones.snapshot().epochs, [1, 0]);
        assert_eq!(updater.guard(), guard);
    }
}
