//! Core error types for wrapzone

use core::fmt;

use crate::error::ScheduleError;

/// Main error type for clock setup and updater operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// The updater's last observed zone is outside `{0, 1}`
    ///
    /// Every timestamp composed after this point would be wrong, so the
    /// integrator must halt or reset instead of continuing.
    CorruptedUpdaterState {
        /// The raw value found in place of the zone
        last_zone: u8,
    },
    /// A zone updater has already been handed out for this clock
    UpdaterAlreadyClaimed,
    /// Guard band width outside the supported range
    InvalidGuardBand {
        /// Requested number of guard bits
        bits: u8,
    },
    /// The configured updater schedule cannot satisfy the timing contract
    Schedule(ScheduleError),
}

impl ClockError {
    /// Returns true if this is a recoverable error
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::CorruptedUpdaterState { .. } => false,
            Self::UpdaterAlreadyClaimed | Self::InvalidGuardBand { .. } | Self::Schedule(_) => true,
        }
    }

    /// Returns true if this error means timestamps can no longer be trusted
    pub const fn is_safety_critical(&self) -> bool {
        matches!(self, Self::CorruptedUpdaterState { .. })
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::CorruptedUpdaterState { .. } => "State",
            Self::UpdaterAlreadyClaimed => "Ownership",
            Self::InvalidGuardBand { .. } => "Configuration",
            Self::Schedule(_) => "Schedule",
        }
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptedUpdaterState { last_zone } => {
                write!(f, "updater state corrupted: last zone is {last_zone}")
            }
            Self::UpdaterAlreadyClaimed => f.write_str("zone updater already claimed"),
            Self::InvalidGuardBand { bits } => {
                write!(f, "guard band of {bits} bits is outside 1..=30")
            }
            Self::Schedule(error) => write!(f, "updater schedule rejected: {error}"),
        }
    }
}

impl From<ScheduleError> for ClockError {
    fn from(error: ScheduleError) -> Self {
        Self::Schedule(error)
    }
}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
