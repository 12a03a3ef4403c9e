//! Updater schedule for the periodic driver

use core::time::Duration;

use crate::clock::ticks_to_duration;
use crate::config::{ClockConfig, ScheduleValidator};
use crate::error::ClockResult;
use crate::zone::GuardBand;

/// A validated updater schedule
///
/// Hand [`period`](Self::period) to whatever fixed-rate tick drives
/// [`ZoneUpdater::update`](crate::zone::ZoneUpdater::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UpdaterSchedule {
    guard: GuardBand,
    counter_hz: u32,
    period_ticks: u32,
    updater_latency_ticks: u32,
}

impl UpdaterSchedule {
    /// Builds the schedule declared by a configuration
    ///
    /// # Example
    /// ```rust
    /// use wrapzone::prelude::*;
    ///
    /// let schedule = UpdaterSchedule::for_config::<DefaultConfig>()?;
    /// assert!(schedule.period() <= schedule.max_period());
    /// assert!(schedule.calls_per_wrap() >= u64::from(schedule.guard().min_calls_per_wrap()));
    /// # Ok::<(), wrapzone::error::ClockError>(())
    /// ```
    pub fn for_config<C: ClockConfig>() -> ClockResult<Self> {
        ScheduleValidator::validate_all::<C>()?;
        Ok(Self {
            guard: GuardBand::from_config::<C>()?,
            counter_hz: C::COUNTER_HZ,
            period_ticks: C::UPDATER_PERIOD_TICKS,
            updater_latency_ticks: C::MAX_UPDATER_LATENCY_TICKS,
        })
    }

    /// Guard band the schedule was validated against
    pub fn guard(&self) -> GuardBand {
        self.guard
    }

    /// Planned period in ticks
    pub fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    /// Planned period as a duration
    pub fn period(&self) -> Duration {
        ticks_to_duration(self.period_ticks as u64, self.counter_hz)
    }

    /// Longest admissible period in ticks
    pub fn max_period_ticks(&self) -> u32 {
        self.guard.max_updater_period(self.updater_latency_ticks)
    }

    /// Longest admissible period as a duration
    pub fn max_period(&self) -> Duration {
        ticks_to_duration(self.max_period_ticks() as u64, self.counter_hz)
    }

    /// Slack between the planned and the longest admissible period, in ticks
    pub fn margin_ticks(&self) -> u32 {
        self.max_period_ticks() - self.period_ticks
    }

    /// Updater calls per full counter wrap at the planned period
    pub fn calls_per_wrap(&self) -> u64 {
        match self.period_ticks {
            0 => u64::MAX,
            period => (1u64 << 32).div_ceil(period as u64),
        }
    }
}
