#![no_main]

use grangebench::measure::{
    AccessTrace, CapacitySet, PageId, StackDistanceEstimator, reference_hit_counts,
};
use libfuzzer_sys::fuzz_target;

// Fuzz the single-pass estimator against explicit LRU replay
//
// The first byte selects the capacity set, the rest becomes the page trace.
// The single pass must agree with the naive per-capacity replay everywhere,
// and the resulting profile must be monotone in capacity.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Capacities 1..=8 from the selector byte's set bits; never empty.
    let selector = data[0];
    let mut raw: Vec<usize> = Vec::new();
    for bit in 0u8..8 {
        if selector & (1 << bit) != 0 {
            raw.push(usize::from(bit) + 1);
        }
    }
    if raw.is_empty() {
        raw.push(4);
    }
    let caps = CapacitySet::new(&raw).unwrap();

    // 32 distinct pages keeps reuse distances near the capacity range.
    let mut trace = AccessTrace::with_capacity(data.len() - 1);
    for &byte in &data[1..] {
        trace.record(PageId(u64::from(byte % 32)));
    }

    let mut estimator = StackDistanceEstimator::new(caps.clone());
    let profile = estimator.hit_counts(&trace);
    estimator.debug_validate_invariants();

    for capacity in caps.iter() {
        let expected = reference_hit_counts(&trace, capacity).unwrap();
        assert_eq!(profile.hit_at(capacity), Some(expected));
    }

    for pair in profile.hits().windows(2) {
        assert!(pair[0] <= pair[1]);
    }

    // Hits can never exceed the repeat accesses in the trace.
    let repeats = (trace.len() - trace.distinct_pages()) as u64;
    assert!(profile.hits().iter().all(|&h| h <= repeats));
});
