//! Platform-specific constants
//!
//! This module provides platform-specific constants for different embedded
//! platforms without requiring HAL dependencies. They seed the defaults of
//! [`define_clock_config!`](crate::define_clock_config) and fix the layout of
//! [`WrapZones`](crate::zone::WrapZones).

/// Platform-specific constants for AURIX TriCore
#[cfg(feature = "aurix")]
pub mod constants {
    /// Maximum interrupt latency in CPU cycles
    pub const MAX_INTERRUPT_LATENCY: u32 = 100;

    /// Alignment of the epoch slots: one cache line
    pub const ZONE_STATE_ALIGN: usize = 32;

    /// Guard band width used when a config does not pick one
    pub const DEFAULT_GUARD_BITS: u8 = 4;
}

/// Platform-specific constants for STM32
#[cfg(feature = "stm32")]
pub mod constants {
    /// Maximum interrupt latency in CPU cycles
    pub const MAX_INTERRUPT_LATENCY: u32 = 50;

    /// Alignment of the epoch slots: both in one doubleword
    pub const ZONE_STATE_ALIGN: usize = 8;

    /// Guard band width used when a config does not pick one
    pub const DEFAULT_GUARD_BITS: u8 = 4;
}

/// Platform-specific constants for Cortex-M
#[cfg(feature = "cortex-m")]
pub mod constants {
    /// Maximum interrupt latency in CPU cycles
    pub const MAX_INTERRUPT_LATENCY: u32 = 25;

    /// Alignment of the epoch slots: both in one doubleword
    pub const ZONE_STATE_ALIGN: usize = 8;

    /// Guard band width used when a config does not pick one
    pub const DEFAULT_GUARD_BITS: u8 = 4;
}

/// Platform-specific constants for RISC-V
#[cfg(feature = "riscv")]
pub mod constants {
    /// Maximum interrupt latency in CPU cycles
    pub const MAX_INTERRUPT_LATENCY: u32 = 30;

    /// Alignment of the epoch slots: one cache line
    pub const ZONE_STATE_ALIGN: usize = 64;

    /// Guard band width used when a config does not pick one
    ///
    /// Multi-hart parts see longer cross-core stalls, so the updater gets a
    /// wider band to land in.
    pub const DEFAULT_GUARD_BITS: u8 = 3;
}

/// Default platform constants (when no specific platform is selected)
#[cfg(not(any(
    feature = "aurix",
    feature = "stm32",
    feature = "cortex-m",
    feature = "riscv"
)))]
pub mod constants {
    /// Maximum interrupt latency in CPU cycles
    pub const MAX_INTERRUPT_LATENCY: u32 = 40;

    /// Alignment of the epoch slots: both in one doubleword
    pub const ZONE_STATE_ALIGN: usize = 8;

    /// Guard band width used when a config does not pick one
    pub const DEFAULT_GUARD_BITS: u8 = 4;
}
