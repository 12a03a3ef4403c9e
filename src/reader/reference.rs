//! Reference reader
//!
//! The classic single-counter extension: mask preemption, compare with the
//! previous sample, count a wrap when the value went down. Exact as long as
//! it is called at least once per wrap, but it serializes every caller, so
//! it only serves as an oracle for the lock-free reader.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::clock::Timestamp64;
use crate::reader::mask::{CriticalSectionControl, MaskGuard};
use crate::traits::{PreemptionControl, RawCounter, TimestampSource};

/// Wrap-counting reader that runs with preemption masked
///
/// # Example
/// ```rust
/// use wrapzone::prelude::*;
///
/// let counter = SyntheticCounter::new(0xFFFF_FFF0);
/// let oracle = ReferenceReader::new(&counter);
/// assert_eq!(oracle.now().value(), 0xFFFF_FFF0);
///
/// counter.set(0x10);
/// assert_eq!(oracle.now().value(), 0x1_0000_0010);
/// ```
#[derive(Debug)]
pub struct ReferenceReader<C: RawCounter, P: PreemptionControl = CriticalSectionControl> {
    counter: C,
    control: P,
    previous: AtomicU32,
    wraps: AtomicU32,
}

impl<C: RawCounter> ReferenceReader<C> {
    /// Creates an oracle masked through the `critical-section` crate
    pub const fn new(counter: C) -> Self {
        Self::with_control(counter, CriticalSectionControl)
    }
}

impl<C: RawCounter, P: PreemptionControl> ReferenceReader<C, P> {
    /// Creates an oracle masked through a custom control
    pub const fn with_control(counter: C, control: P) -> Self {
        Self {
            counter,
            control,
            previous: AtomicU32::new(0),
            wraps: AtomicU32::new(0),
        }
    }

    /// Current 64-bit timestamp
    pub fn now(&self) -> Timestamp64 {
        let _guard = MaskGuard::new(&self.control);

        let raw = self.counter.read();
        let mut wraps = self.wraps.load(Ordering::Relaxed);
        if raw < self.previous.load(Ordering::Relaxed) {
            wraps = wraps.wrapping_add(1);
            self.wraps.store(wraps, Ordering::Relaxed);
        }
        self.previous.store(raw, Ordering::Relaxed);

        Timestamp64::from_parts(wraps, raw)
    }

    /// Wraps counted so far
    pub fn wraps(&self) -> u32 {
        self.wraps.load(Ordering::Relaxed)
    }
}

impl<C: RawCounter, P: PreemptionControl> TimestampSource for ReferenceReader<C, P> {
    fn now(&self) -> Timestamp64 {
        ReferenceReader::now(self)
    }
}
