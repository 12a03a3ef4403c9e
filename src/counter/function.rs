//! Function-backed counter
//!
//! Adapts a HAL accessor such as a cycle-counter read into a
//! [`RawCounter`] without writing a wrapper type.

use crate::traits::RawCounter;

/// A counter read through a plain function
#[derive(Debug, Clone, Copy)]
pub struct FnCounter {
    read: fn() -> u32,
}

impl FnCounter {
    /// Wraps `read`, which must return the current count with no side effects
    pub const fn new(read: fn() -> u32) -> Self {
        Self { read }
    }
}

impl RawCounter for FnCounter {
    #[inline]
    fn read(&self) -> u32 {
        (self.read)()
    }
}
