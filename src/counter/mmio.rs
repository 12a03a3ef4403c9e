//! Memory-mapped counter register

use crate::traits::RawCounter;

/// A free-running counter exposed as a 32-bit memory-mapped register
///
/// Each read is a single volatile 32-bit load.
#[derive(Debug, Clone, Copy)]
pub struct MmioCounter {
    register: *const u32,
}

// Reading the register has no side effects and is a single bus access.
unsafe impl Send for MmioCounter {}
unsafe impl Sync for MmioCounter {}

impl MmioCounter {
    /// Wraps the register at `register`
    ///
    /// # Safety
    /// `register` must be non-null, 4-byte aligned and point to a readable
    /// 32-bit counter for as long as this value (or any copy) is used.
    /// Reading it must have no side effects.
    pub const unsafe fn new(register: *const u32) -> Self {
        Self { register }
    }

    /// Wraps the register at a fixed address
    ///
    /// # Safety
    /// Same contract as [`new`](Self::new).
    pub const unsafe fn at_address(address: usize) -> Self {
        Self {
            register: address as *const u32,
        }
    }

    /// Address of the wrapped register
    pub fn address(&self) -> usize {
        self.register as usize
    }
}

impl RawCounter for MmioCounter {
    #[inline]
    fn read(&self) -> u32 {
        // SAFETY: validity of the pointer is the constructor's contract.
        unsafe { core::ptr::read_volatile(self.register) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_reads_through_register() {
        let register = AtomicU32::new(0x1234_5678);
        let counter = unsafe { MmioCounter::new(register.as_ptr()) };
        assert_eq!(counter.read(), 0x1234_5678);

        register.store(0xFFFF_FFFF, Ordering::SeqCst);
        assert_eq!(counter.read(), 0xFFFF_FFFF);
        assert_eq!(counter.address(), register.as_ptr() as usize);
    }
}
