//! Capability traits module
//!
//! The algorithm touches the outside world in exactly two places: reading
//! the hardware counter and, for the reference oracle only, masking
//! preemption. Both are traits so tests can supply deterministic stand-ins.

pub mod counter;
pub mod preemption;
pub mod source;

// Re-export main traits
pub use counter::RawCounter;
pub use preemption::PreemptionControl;
pub use source::TimestampSource;
