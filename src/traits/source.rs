//! Timestamp source trait

use crate::clock::Timestamp64;

/// Anything that can produce a composed 64-bit timestamp
///
/// Implemented by both the lock-free [`WrapClock`](crate::reader::WrapClock)
/// and the masking [`ReferenceReader`](crate::reader::ReferenceReader), so
/// test harnesses can drive them interchangeably.
pub trait TimestampSource {
    /// Returns the current timestamp
    fn now(&self) -> Timestamp64;
}
