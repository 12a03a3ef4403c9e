//! Raw counter capability

/// A free-running 32-bit counter
///
/// Implementations must return the current count in a single atomic-width
/// access, with no side effects. The count must be monotonic modulo 2^32 and
/// must never be paused, reset, or written by this crate.
pub trait RawCounter {
    /// Reads the current count
    fn read(&self) -> u32;
}

impl<T: RawCounter + ?Sized> RawCounter for &T {
    #[inline]
    fn read(&self) -> u32 {
        (**self).read()
    }
}
