//! Configuration presets module
//!
//! This module provides pre-defined clock configurations for common counter
//! sources. Periods are chosen with ample margin below the guard band width.

use crate::config::define_clock_config;

// SysTick-style microsecond timers
define_clock_config! {
    name: SysTick1MHzConfig,
    counter_hz: 1_000_000,         // wraps every ~71.6 minutes
    updater_period_ticks: 1_000_000, // 1 s
    guard_bits: 4,
    max_updater_latency_ticks: 1_000,
    max_reader_latency_ticks: 100_000,
}

// Core cycle counters (DWT CYCCNT and friends)
define_clock_config! {
    name: CycleCounter72MHzConfig,
    counter_hz: 72_000_000,        // wraps every ~59.7 s
    updater_period_ticks: 7_200_000, // 100 ms
    guard_bits: 4,
    max_updater_latency_ticks: 72_000,
    max_reader_latency_ticks: 7_200_000,
}

define_clock_config! {
    name: CycleCounter480MHzConfig,
    counter_hz: 480_000_000,        // wraps every ~8.9 s
    updater_period_ticks: 48_000_000, // 100 ms
    guard_bits: 4,
    max_updater_latency_ticks: 480_000,
    max_reader_latency_ticks: 48_000_000,
}

// 32.768 kHz low-power timers
define_clock_config! {
    name: LowPower32kHzConfig,
    counter_hz: 32_768,             // wraps every ~36.4 hours
    updater_period_ticks: 1_966_080, // 60 s
    guard_bits: 8,
    max_updater_latency_ticks: 32_768,
    max_reader_latency_ticks: 327_680,
}
