//! Schedule contract errors
//!
//! The algorithm cannot notice at runtime that its updater ran too rarely;
//! the symptom is a timestamp one epoch behind. These errors let a
//! configuration be rejected before that can happen.

use core::fmt;

/// Ways a configured schedule can violate the updater/reader timing contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScheduleError {
    /// Counter frequency is zero
    ZeroFrequency,
    /// Updater period (plus its own latency) exceeds the guard band width
    UpdaterPeriodTooLong {
        /// Largest period that still lands inside every guard band
        max_ticks: u32,
        /// Configured period
        actual_ticks: u32,
    },
    /// Updater latency alone consumes the whole guard band
    UpdaterLatencyTooLong {
        /// Largest tolerable latency
        max_ticks: u32,
        /// Configured latency
        actual_ticks: u32,
    },
    /// Reader preemption could outlast the distance to the next slot write
    ReaderLatencyTooLong {
        /// Largest tolerable preemption between the reader's two accesses
        max_ticks: u32,
        /// Configured worst case
        actual_ticks: u32,
    },
}

impl ScheduleError {
    /// Returns true if a system running with this schedule can emit
    /// timestamps that are a full epoch off
    pub const fn is_critical(&self) -> bool {
        match self {
            Self::ZeroFrequency => false,
            Self::UpdaterPeriodTooLong { .. }
            | Self::UpdaterLatencyTooLong { .. }
            | Self::ReaderLatencyTooLong { .. } => true,
        }
    }

    /// Returns the error category
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ZeroFrequency => "Clock",
            Self::UpdaterPeriodTooLong { .. } | Self::UpdaterLatencyTooLong { .. } => "Updater",
            Self::ReaderLatencyTooLong { .. } => "Reader",
        }
    }
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrequency => f.write_str("counter frequency is zero"),
            Self::UpdaterPeriodTooLong {
                max_ticks,
                actual_ticks,
            } => write!(
                f,
                "updater period {actual_ticks} ticks exceeds {max_ticks} ticks"
            ),
            Self::UpdaterLatencyTooLong {
                max_ticks,
                actual_ticks,
            } => write!(
                f,
                "updater latency {actual_ticks} ticks exceeds {max_ticks} ticks"
            ),
            Self::ReaderLatencyTooLong {
                max_ticks,
                actual_ticks,
            } => write!(
                f,
                "reader latency {actual_ticks} ticks exceeds {max_ticks} ticks"
            ),
        }
    }
}
