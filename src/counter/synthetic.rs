//! Settable software counter
//!
//! Stands in for the hardware register in tests, simulations and benches.
//! Only one context should move it; readers may sample it from anywhere.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::traits::RawCounter;

/// A 32-bit counter driven by software
///
/// Uses plain atomic loads and stores so it works on targets without
/// read-modify-write atomics.
#[derive(Debug, Default)]
pub struct SyntheticCounter {
    value: AtomicU32,
}

impl SyntheticCounter {
    /// Creates a counter starting at `start`
    pub const fn new(start: u32) -> Self {
        Self {
            value: AtomicU32::new(start),
        }
    }

    /// Sets the current count
    pub fn set(&self, value: u32) {
        self.value.store(value, Ordering::Release);
    }

    /// Advances the count by `ticks`, wrapping at 2^32, and returns the new count
    pub fn advance(&self, ticks: u32) -> u32 {
        let next = self.value.load(Ordering::Relaxed).wrapping_add(ticks);
        self.value.store(next, Ordering::Release);
        next
    }
}

impl RawCounter for SyntheticCounter {
    #[inline]
    fn read(&self) -> u32 {
        self.value.load(Ordering::Acquire)
    }
}
