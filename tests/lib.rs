//! Common utilities for wrapzone integration tests
//!
//! This module provides:
//! - Proptest configuration for different test scenarios
//! - Counter trace generators that honour (or deliberately break) the
//!   updater's call-frequency contract
//! - A harness driving a synthetic counter, the zone updater, the lock-free
//!   reader and the reference oracle in lockstep

#![allow(dead_code)]
#![allow(special_module_name)]
#![allow(unused)]

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use wrapzone::prelude::*;

/// Guard band width of the default guard band, in ticks
pub const GUARD_WIDTH: u32 = GuardBand::DEFAULT.width();

/// One full counter wrap, in ticks
pub const EPOCH: u64 = 1 << 32;

/// Standard proptest configuration for trace properties
pub fn trace_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 200,
        timeout: 5000,
        ..ProptestConfig::default()
    }
}

/// Fewer, longer cases for cross-checking against the oracle
pub fn cross_check_config() -> ProptestConfig {
    ProptestConfig {
        cases: 16,
        max_shrink_iters: 50,
        timeout: 10_000,
        ..ProptestConfig::default()
    }
}

/// Any valid guard band
pub fn guard_strategy() -> impl Strategy<Value = GuardBand> {
    (GuardBand::MIN_BITS..=GuardBand::MAX_BITS).prop_map(|bits| GuardBand::new(bits).unwrap())
}

/// Guard bands that keep traces short enough to cover several wraps
pub fn coarse_guard_strategy() -> impl Strategy<Value = GuardBand> {
    (1u8..=6).prop_map(|bits| GuardBand::new(bits).unwrap())
}

/// Counter advances that never skip a whole guard band
pub fn contract_step_strategy(guard: GuardBand) -> impl Strategy<Value = u32> {
    1u32..=guard.width()
}

/// A counter trace that keeps the updater contract for `guard`
pub fn contract_trace_strategy(
    guard: GuardBand,
    len: core::ops::Range<usize>,
) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(contract_step_strategy(guard), len)
}

/// Operations applied by [`TraceHarness::apply`]
#[derive(Debug, Clone, Copy, Arbitrary)]
pub enum TraceOp {
    /// Advance the counter and run the updater
    Tick(#[proptest(strategy = "1u32..=GUARD_WIDTH")] u32),
    /// Read without moving the counter
    Sample,
}

/// Drives one counter, one clock, its updater and an oracle together
///
/// The counter and clock are leaked so the updater can borrow them for
/// `'static`; every harness leaks a few dozen bytes.
pub struct TraceHarness {
    counter: &'static SyntheticCounter,
    clock: &'static WrapClock<&'static SyntheticCounter>,
    updater: ZoneUpdater<'static, &'static SyntheticCounter>,
    oracle: ReferenceReader<&'static SyntheticCounter>,
}

impl TraceHarness {
    /// Harness with the default guard band, counter starting at `start`
    pub fn new(start: u32) -> Self {
        Self::with_guard(start, GuardBand::DEFAULT)
    }

    /// Harness with a specific guard band
    pub fn with_guard(start: u32, guard: GuardBand) -> Self {
        let counter: &'static SyntheticCounter = Box::leak(Box::new(SyntheticCounter::new(start)));
        let clock: &'static WrapClock<&'static SyntheticCounter> =
            Box::leak(Box::new(WrapClock::with_guard(counter, guard)));
        let mut updater = clock.updater().expect("fresh clock has no updater yet");
        // a start inside a guard band must be handled before the first step
        updater.update().expect("updater state intact");
        let oracle = ReferenceReader::new(counter);
        // the oracle must see the start value before any wrap
        oracle.now();
        Self {
            counter,
            clock,
            updater,
            oracle,
        }
    }

    pub fn counter(&self) -> &'static SyntheticCounter {
        self.counter
    }

    pub fn clock(&self) -> &'static WrapClock<&'static SyntheticCounter> {
        self.clock
    }

    pub fn set(&self, raw: u32) {
        self.counter.set(raw);
    }

    pub fn advance(&self, ticks: u32) -> u32 {
        self.counter.advance(ticks)
    }

    pub fn update(&mut self) {
        self.updater.update().expect("updater state intact");
    }

    /// Lock-free reading
    pub fn read(&self) -> Timestamp64 {
        self.clock.now()
    }

    /// Oracle reading; must run at least once per wrap to stay exact
    pub fn oracle(&self) -> Timestamp64 {
        self.oracle.now()
    }

    /// Advances, updates, then returns `(lock_free, oracle)`
    pub fn tick(&mut self, ticks: u32) -> (Timestamp64, Timestamp64) {
        self.advance(ticks);
        self.update();
        (self.read(), self.oracle())
    }

    /// Advances without updating, then returns `(lock_free, oracle)`
    pub fn starve(&mut self, ticks: u32) -> (Timestamp64, Timestamp64) {
        self.advance(ticks);
        (self.read(), self.oracle())
    }

    /// Applies one generated operation and returns `(lock_free, oracle)`
    pub fn apply(&mut self, op: TraceOp) -> (Timestamp64, Timestamp64) {
        match op {
            TraceOp::Tick(ticks) => self.tick(ticks),
            TraceOp::Sample => (self.read(), self.oracle()),
        }
    }

    pub fn epochs(&self) -> [u32; 2] {
        self.clock.zones().snapshot().epochs
    }

    pub fn updater(&self) -> &ZoneUpdater<'static, &'static SyntheticCounter> {
        &self.updater
    }
}

/// Signed distance `oracle - lock_free` in ticks
pub fn lag(lock_free: Timestamp64, oracle: Timestamp64) -> i128 {
    oracle.value() as i128 - lock_free.value() as i128
}
