//! Property-based tests for the lock-free timestamp reader
//!
//! Every trace here honours the updater's call-frequency contract unless a
//! test says otherwise, and every reading is cross-checked against the
//! interrupt-masking reference reader.

#![allow(special_module_name)]

mod lib;
use lib::*;

use proptest::prelude::*;
use quickcheck_macros::quickcheck;
use wrapzone::prelude::*;

proptest! {
    #![proptest_config(trace_config())]

    /// Readings strictly increase along any trace that keeps the contract
    #[test]
    fn prop_monotone_under_contract(
        start in any::<u32>(),
        steps in contract_trace_strategy(GuardBand::DEFAULT, 1..400),
    ) {
        let mut harness = TraceHarness::new(start);
        let mut previous = harness.read();
        for step in steps {
            let (now, _) = harness.tick(step);
            prop_assert!(now > previous, "{:?} not after {:?}", now, previous);
            previous = now;
        }
    }

    /// The low word of a reading is always the sampled counter value
    #[test]
    fn prop_low_word_mirrors_counter(
        epochs in any::<[u32; 2]>(),
        raw in any::<u32>(),
    ) {
        let counter = SyntheticCounter::new(raw);
        let clock = WrapClock::with_zones(
            &counter,
            GuardBand::DEFAULT,
            WrapZones::with_epochs(epochs),
        );
        let now = clock.now();
        prop_assert_eq!(now.raw(), raw);
        prop_assert_eq!(now.epoch(), epochs[Zone::of(raw).index()]);
    }

    /// Any guard band keeps the reader exact when the updater runs often enough
    #[test]
    fn prop_any_guard_matches_oracle(
        guard in coarse_guard_strategy(),
        start in any::<u32>(),
        seeds in prop::collection::vec(any::<u32>(), 64..256),
    ) {
        let mut harness = TraceHarness::with_guard(start, guard);
        for seed in seeds {
            let step = seed % guard.width() + 1;
            let (now, oracle) = harness.tick(step);
            prop_assert_eq!(now, oracle);
        }
    }

    /// Mixed ticks and idle samples agree with the oracle
    #[test]
    fn prop_generated_ops_match_oracle(
        start in any::<u32>(),
        ops in prop::collection::vec(any::<TraceOp>(), 1..300),
    ) {
        let mut harness = TraceHarness::new(start);
        for op in ops {
            let (now, oracle) = harness.apply(op);
            prop_assert_eq!(now, oracle);
        }
    }

    /// The updater never writes the slot of the zone the counter is in
    #[test]
    fn prop_active_slot_untouched(
        start in any::<u32>(),
        steps in contract_trace_strategy(GuardBand::DEFAULT, 1..200),
    ) {
        let mut harness = TraceHarness::new(start);
        for step in steps {
            let raw = harness.advance(step);
            let active = Zone::of(raw);
            let before = harness.epochs();
            harness.update();
            prop_assert_eq!(harness.epochs()[active.index()], before[active.index()]);
        }
    }

    /// Guard band helpers stay consistent with each other
    #[test]
    fn prop_guard_band_laws(guard in guard_strategy(), raw in any::<u32>()) {
        prop_assert_eq!(guard.contains(raw), guard.contains(raw ^ 0x8000_0000));
        prop_assert_eq!(guard.threshold().wrapping_add(guard.width()), 0x8000_0000);
        prop_assert_eq!(
            guard.width() as u64 * guard.min_calls_per_wrap() as u64,
            EPOCH,
        );
        prop_assert_eq!(
            guard.max_reader_latency() as u64 + guard.width() as u64,
            EPOCH / 2,
        );
    }
}

proptest! {
    #![proptest_config(cross_check_config())]

    /// Long randomized cross-check spanning many wraps
    #[test]
    fn prop_long_cross_check(
        start in any::<u32>(),
        steps in contract_trace_strategy(GuardBand::DEFAULT, 2_000..4_000),
    ) {
        let mut harness = TraceHarness::new(start);
        let mut previous = harness.oracle();
        for step in steps {
            let (now, oracle) = harness.tick(step);
            prop_assert_eq!(now, oracle);
            prop_assert_eq!(now.ticks_since(previous), step as u64);
            previous = now;
        }
        // at least one wrap for any start: 2000 steps averaging width / 2
        prop_assert!(harness.oracle().epoch() >= 1);
    }
}

#[quickcheck]
fn qc_parts_round_trip(value: u64) -> bool {
    let ts = Timestamp64::new(value);
    Timestamp64::from_parts(ts.epoch(), ts.raw()) == ts
}

#[quickcheck]
fn qc_compose_keeps_raw(low: u32, high: u32, raw: u32) -> bool {
    let zones = WrapZones::with_epochs([low, high]);
    let ts = zones.compose(raw);
    ts.raw() == raw && ts.zone() == Zone::of(raw)
}

#[quickcheck]
fn qc_snapshot_restore(low: u32, high: u32) -> bool {
    let snapshot = WrapZones::with_epochs([low, high]).snapshot();
    snapshot.restore().snapshot() == snapshot
}

#[quickcheck]
fn qc_ticks_since_is_saturating(a: u64, b: u64) -> bool {
    let (a, b) = (Timestamp64::new(a), Timestamp64::new(b));
    let forward = a.ticks_since(b);
    if a >= b {
        forward == a.value() - b.value()
    } else {
        forward == 0
    }
}
