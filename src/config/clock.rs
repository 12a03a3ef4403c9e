//! Clock configuration trait and default implementation

use crate::config::ScheduleValidator;
use crate::error::ClockResult;

/// Compile-time description of a counter and its updater schedule
///
/// All tick quantities are in raw counter ticks.
pub trait ClockConfig: Clone {
    /// Counter rate in ticks per second
    const COUNTER_HZ: u32;

    /// Guard band width in bits (top `1/2^GUARD_BITS` of each zone)
    const GUARD_BITS: u8;

    /// Planned period between two updater calls
    const UPDATER_PERIOD_TICKS: u32;

    /// Worst-case delay between the updater's counter sample and its store
    const MAX_UPDATER_LATENCY_TICKS: u32;

    /// Worst-case stall between a reader's counter read and its slot load
    const MAX_READER_LATENCY_TICKS: u32;

    /// Validates that the configuration satisfies the timing contract
    fn validate() -> ClockResult<()> {
        ScheduleValidator::validate_all::<Self>()
    }

    /// Length of a full 2^32-tick wrap in whole seconds
    fn wrap_period_secs() -> u64 {
        match Self::COUNTER_HZ {
            0 => 0,
            hz => (1u64 << 32) / hz as u64,
        }
    }
}

/// Default configuration for testing and examples
///
/// A 1 MHz counter (wraps every ~71.6 minutes) with the top 1/16 of each
/// zone as guard band and an updater roughly once a second.
#[derive(Debug, Clone, Copy)]
pub struct DefaultConfig;

impl Default for DefaultConfig {
    fn default() -> Self {
        Self
    }
}

impl ClockConfig for DefaultConfig {
    const COUNTER_HZ: u32 = 1_000_000;
    const GUARD_BITS: u8 = 4;
    const UPDATER_PERIOD_TICKS: u32 = 1 << 20;
    const MAX_UPDATER_LATENCY_TICKS: u32 = 1_000;
    const MAX_READER_LATENCY_TICKS: u32 = 1_000_000;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validation() {
        assert!(DefaultConfig::validate().is_ok());
    }

    #[test]
    fn test_wrap_period() {
        assert_eq!(DefaultConfig::wrap_period_secs(), 4294);
    }
}
