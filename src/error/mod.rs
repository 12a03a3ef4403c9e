//! Error handling module for wrapzone
//!
//! The timestamp read path never fails. Errors only come out of setup
//! (guard band and schedule validation, updater claiming) and out of the
//! updater when its private state has been corrupted.

pub mod schedule;
pub mod types;

// Re-export main types
pub use schedule::ScheduleError;
pub use types::{ClockError, ClockResult};
