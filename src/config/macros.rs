//! Clock configuration macros
//!
//! This module provides the `define_clock_config!` macro for easy creation
//! of custom clock configurations.

/// Macro to define a custom clock configuration
///
/// Creates a unit struct implementing [`ClockConfig`](crate::config::ClockConfig).
/// Omitted optional fields default to the platform's guard band, and both
/// latencies to the platform's interrupt latency. That bound is in core
/// cycles; a counter never ticks faster than the core, so it also bounds
/// the latency in ticks.
///
/// # Example
///
/// ```rust
/// use wrapzone::config::{ClockConfig, define_clock_config};
///
/// define_clock_config! {
///     name: Tim2Config,
///     counter_hz: 84_000_000,
///     updater_period_ticks: 8_400_000, // 100 ms
///     max_reader_latency_ticks: 84_000,
/// }
///
/// assert!(Tim2Config::validate().is_ok());
/// ```
#[macro_export]
macro_rules! define_clock_config {
    // Helper arms for default values
    (@default , $default:expr) => { $default };
    (@default $value:expr, $default:expr) => { $value };

    (
        name: $name:ident,
        counter_hz: $hz:expr,
        updater_period_ticks: $period:expr
        $(, guard_bits: $bits:expr)?
        $(, max_updater_latency_ticks: $updater_latency:expr)?
        $(, max_reader_latency_ticks: $reader_latency:expr)?
        $(,)?
    ) => {
        /// Custom clock configuration
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl $crate::config::ClockConfig for $name {
            const COUNTER_HZ: u32 = $hz;
            const UPDATER_PERIOD_TICKS: u32 = $period;

            // Optional parameters with defaults
            const GUARD_BITS: u8 = $crate::define_clock_config!(
                @default $($bits)?, $crate::platform::constants::DEFAULT_GUARD_BITS
            );
            const MAX_UPDATER_LATENCY_TICKS: u32 = $crate::define_clock_config!(
                @default $($updater_latency)?, $crate::platform::constants::MAX_INTERRUPT_LATENCY
            );
            const MAX_READER_LATENCY_TICKS: u32 = $crate::define_clock_config!(
                @default $($reader_latency)?, $crate::platform::constants::MAX_INTERRUPT_LATENCY
            );
        }
    };
}

// Re-export the macro for convenience
pub use define_clock_config;
