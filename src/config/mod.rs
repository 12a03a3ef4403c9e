//! Configuration module for wrapzone
//!
//! Counter rate, guard band width and the integrator's scheduling promises
//! are compile-time constants on a [`ClockConfig`]. The validator checks
//! them against the timing contract; [`UpdaterSchedule`] turns them into a
//! period for the periodic driver.

pub mod clock;
pub mod macros;
pub mod schedule;
pub mod validation;

// Re-export main types
pub use clock::{ClockConfig, DefaultConfig};
pub use macros::define_clock_config;
pub use schedule::UpdaterSchedule;
pub use validation::ScheduleValidator;
