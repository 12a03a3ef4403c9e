#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Lock-free 64-bit timestamps from 32-bit free-running counters**
//!
//! wrapzone is a `no_std` library that extends a 32-bit hardware counter
//! (SysTick-style timers, cycle counters, RTC prescalers) into a monotonic
//! 64-bit timestamp. Readers run from any thread or interrupt handler without
//! masking interrupts, taking a lock, or retrying.
//!
//! ## How it works
//!
//! The counter range is split into two **zones** by its top bit. Each zone
//! owns an epoch slot holding the high 32 bits to use while the counter sits
//! in that zone. A reader samples the counter once, picks the slot of the
//! sampled zone, loads it once, and concatenates the two halves.
//!
//! A single **updater**, driven periodically, bumps the slot of the zone the
//! counter just left, but only once the counter is deep inside the other
//! zone (the **guard band**, by default the top 1/16 of the zone). The slot
//! being read is therefore never the slot being written, unless a reader
//! stalls for most of a zone between its two memory accesses.
//!
//! ## Features
//!
//! - **Lock-free reads** - one counter read, one atomic load, no branches on shared state
//! - **Single writer** - the updater is claimed once per clock and needs no CAS
//! - **Configurable guard band** - derived from counter rate and worst-case latencies
//! - **Reference oracle** - an interrupt-masking reader for cross-checking in tests
//! - **No Dynamic Allocation** - every object is `const`-constructible and can live in a `static`
//!
//! ### Platform-Specific Features - **Mutually exclusive**
//! - `aurix` - AURIX TriCore automotive MCUs
//! - `stm32` - STM32 ARM Cortex-M MCUs
//! - `cortex-m` - Generic ARM Cortex-M platforms
//! - `riscv` - RISC-V embedded processors
//!
//! ### Optional Features
//! - `serde` - Serde serialization of timestamps and zone snapshots (no_std compatible)
//! - `defmt` - Log updater transitions through `defmt`
//! - `log` - Log updater transitions through the `log` facade
//!
//! ## Quick Start
//!
//! ```rust
//! use wrapzone::prelude::*;
//!
//! let counter = SyntheticCounter::new(0);
//! let clock = WrapClock::new(&counter);
//! let mut updater = clock.updater()?;
//!
//! counter.set(0xFFFF_FFFF);
//! updater.update()?; // periodic tick, deep inside the high zone
//! counter.set(0x0000_0010);
//!
//! assert_eq!(clock.now().value(), 0x1_0000_0010);
//! # Ok::<(), wrapzone::error::ClockError>(())
//! ```
//!
//! ## Static use from interrupt handlers
//!
//! ```rust,ignore
//! use wrapzone::prelude::*;
//!
//! static CLOCK: WrapClock<FnCounter> = WrapClock::new(FnCounter::new(read_timer));
//!
//! fn timer_tick(updater: &mut ZoneUpdater<'static, FnCounter>) {
//!     updater.update().expect("zone updater state corrupted");
//! }
//!
//! fn any_context() -> u64 {
//!     CLOCK.now().value()
//! }
//! ```
//!
//! ## Updater schedule
//!
//! With a guard band of `b` bits the updater must run at least `2^(b+1)`
//! times per full counter wrap, and a reader may be stalled between its two
//! accesses for at most `2^31 - 2^(31-b)` ticks. [`ClockConfig`] and
//! [`ScheduleValidator`] check a concrete schedule against those bounds.
//!
//! [`ClockConfig`]: crate::config::ClockConfig
//! [`ScheduleValidator`]: crate::config::ScheduleValidator

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::assertions_on_constants)]

#[macro_use]
mod fmt;

// Core infrastructure modules
pub mod clock;
pub mod config;
pub mod error;
pub mod platform;
pub mod traits;

// Counter sources, zone state and readers
pub mod counter;
pub mod reader;
pub mod zone;

// Configuration presets
pub mod configs;

/// Prelude module of wrapzone
///
/// Convenient re-exports for common wrapzone types and traits
pub mod prelude {

    // Re-export core traits
    pub use crate::traits::*;

    // Re-export configuration
    pub use crate::config::{
        ClockConfig, DefaultConfig, ScheduleValidator, UpdaterSchedule, define_clock_config,
    };

    // Re-export error types
    pub use crate::error::{ClockError, ClockResult, ScheduleError};

    // Re-export clock types
    pub use crate::clock::Timestamp64;

    // Re-export configuration presets
    pub use crate::configs::*;

    // Re-export counters, zone state and readers
    pub use crate::counter::{FnCounter, MmioCounter, SyntheticCounter};
    pub use crate::reader::{CriticalSectionControl, MaskGuard, ReferenceReader, WrapClock};
    pub use crate::zone::{GuardBand, WrapZones, Zone, ZoneSnapshot, ZoneUpdater};
}
