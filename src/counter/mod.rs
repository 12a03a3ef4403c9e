//! Raw counter sources
//!
//! [`RawCounter`](crate::traits::RawCounter) implementations for real
//! hardware and for tests.

pub mod function;
pub mod mmio;
pub mod synthetic;

// Re-export main types
pub use function::FnCounter;
pub use mmio::MmioCounter;
pub use synthetic::SyntheticCounter;
