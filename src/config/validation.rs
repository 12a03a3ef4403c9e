//! Schedule validation utilities
//!
//! Checks a [`ClockConfig`] against the timing contract. A configuration
//! that passes cannot make the lock-free reader go an epoch off, as long as
//! the integrator actually honours the periods and latencies it declared.

use crate::config::ClockConfig;
use crate::error::{ClockResult, ScheduleError};
use crate::zone::GuardBand;

/// Validator for clock configurations
pub struct ScheduleValidator;

impl ScheduleValidator {
    /// Checks that the counter actually ticks
    pub fn check_frequency<C: ClockConfig>() -> ClockResult<()> {
        if C::COUNTER_HZ == 0 {
            return Err(ScheduleError::ZeroFrequency.into());
        }
        Ok(())
    }

    /// Checks the guard band width and returns it
    pub fn check_guard_band<C: ClockConfig>() -> ClockResult<GuardBand> {
        GuardBand::from_config::<C>()
    }

    /// Checks that the updater can finish a store inside one guard band
    pub fn check_updater_latency<C: ClockConfig>() -> ClockResult<()> {
        let guard = Self::check_guard_band::<C>()?;
        if C::MAX_UPDATER_LATENCY_TICKS >= guard.width() {
            return Err(ScheduleError::UpdaterLatencyTooLong {
                max_ticks: guard.width() - 1,
                actual_ticks: C::MAX_UPDATER_LATENCY_TICKS,
            }
            .into());
        }
        Ok(())
    }

    /// Checks that the updater lands in every guard band in time
    pub fn check_updater_period<C: ClockConfig>() -> ClockResult<()> {
        let guard = Self::check_guard_band::<C>()?;
        let max_ticks = guard.max_updater_period(C::MAX_UPDATER_LATENCY_TICKS);
        if C::UPDATER_PERIOD_TICKS > max_ticks {
            return Err(ScheduleError::UpdaterPeriodTooLong {
                max_ticks,
                actual_ticks: C::UPDATER_PERIOD_TICKS,
            }
            .into());
        }
        Ok(())
    }

    /// Checks that a stalled reader cannot see its slot rewritten
    pub fn check_reader_latency<C: ClockConfig>() -> ClockResult<()> {
        let guard = Self::check_guard_band::<C>()?;
        if C::MAX_READER_LATENCY_TICKS > guard.max_reader_latency() {
            return Err(ScheduleError::ReaderLatencyTooLong {
                max_ticks: guard.max_reader_latency(),
                actual_ticks: C::MAX_READER_LATENCY_TICKS,
            }
            .into());
        }
        Ok(())
    }

    /// Comprehensive validation of all configuration aspects
    pub fn validate_all<C: ClockConfig>() -> ClockResult<()> {
        let result = Self::check_frequency::<C>()
            .and_then(|()| Self::check_updater_latency::<C>())
            .and_then(|()| Self::check_updater_period::<C>())
            .and_then(|()| Self::check_reader_latency::<C>());

        if let Err(error) = result {
            warn!("clock configuration rejected: {}", error);
        }
        result
    }
}
