//! Ordered search contract tests.
//!
//! Exhaustive over every non-decreasing sequence up to length 7 on a
//! 4-symbol alphabet, with targets spanning below, inside, and above the
//! alphabet. Proves:
//! 1. Correctness: a returned index holds the target
//! 2. Completeness: a present target is always found
//! 3. Soundness of absence: an absent target is never "found"
//! 4. Boundary: the empty sequence never finds anything
//! 5. Determinism: repeated calls agree
//! 6. Probe count stays within `floor(log2 n) + 1`

use bisect_kernel::halving::{probe_budget, search, search_by, search_by_key};
use bisect_probe::trace_search;
use lock_tests::fixtures::{all_sorted_sequences, sorted_with_duplicates, Lcg};

const MAX_LEN: usize = 7;
const ALPHABET: u8 = 4;

fn targets() -> std::ops::RangeInclusive<u8> {
    0..=ALPHABET
}

// ---------------------------------------------------------------------------
// 1-3. Correctness, completeness, soundness (exhaustive)
// ---------------------------------------------------------------------------

#[test]
fn exhaustive_correctness_completeness_soundness() {
    for seq in all_sorted_sequences(MAX_LEN, ALPHABET) {
        for target in targets() {
            let present = seq.contains(&target);
            match search(&seq, &target) {
                Some(i) => {
                    assert!(i < seq.len(), "index {i} out of range for {seq:?}");
                    assert_eq!(seq[i], target, "wrong element for {target} in {seq:?}");
                }
                None => assert!(!present, "missed present {target} in {seq:?}"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Boundary
// ---------------------------------------------------------------------------

#[test]
fn empty_sequence_is_always_absent() {
    let empty: [i64; 0] = [];
    for target in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_eq!(search(&empty, &target), None);
    }
    assert_eq!(search::<String>(&[], &String::new()), None);
}

// ---------------------------------------------------------------------------
// 5. Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_agree() {
    for seq in all_sorted_sequences(5, ALPHABET) {
        for target in targets() {
            let first = search(&seq, &target);
            for _ in 0..3 {
                assert_eq!(search(&seq, &target), first);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Probe budget
// ---------------------------------------------------------------------------

#[test]
fn probe_count_within_budget() {
    for seq in all_sorted_sequences(MAX_LEN, ALPHABET) {
        for target in targets() {
            let trace = trace_search(&seq, &target);
            assert!(
                trace.steps.len() <= probe_budget(seq.len()) as usize,
                "{} probes for len {}",
                trace.steps.len(),
                seq.len()
            );
            assert_eq!(trace.result(), search(&seq, &target));
        }
    }
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_hit_in_odd_gaps() {
    assert_eq!(search(&[1, 3, 5, 7, 9, 11], &7), Some(3));
}

#[test]
fn scenario_miss_in_gap() {
    assert_eq!(search(&[1, 3, 5, 7, 9, 11], &4), None);
}

#[test]
fn scenario_empty() {
    assert_eq!(search::<i32>(&[], &5), None);
}

#[test]
fn scenario_single() {
    assert_eq!(search(&[5], &5), Some(0));
}

#[test]
fn scenario_all_duplicates() {
    let found = search(&[2, 2, 2, 2], &2);
    assert!(
        matches!(found, Some(0..=3)),
        "expected any index in 0..=3, got {found:?}"
    );
}

#[test]
fn scenario_last_of_ten() {
    assert_eq!(search(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &10), Some(9));
}

// ---------------------------------------------------------------------------
// Larger inputs (fixed seeds)
// ---------------------------------------------------------------------------

#[test]
fn large_sequences_with_duplicates() {
    for seed in 0..8 {
        let seq = sorted_with_duplicates(seed, 10_000);
        let mut rng = Lcg::new(seed ^ 0x9e37);
        for _ in 0..500 {
            let pick = usize::try_from(rng.below(seq.len() as u64)).unwrap();
            let present = seq[pick];
            let i = search(&seq, &present).expect("present value must be found");
            assert_eq!(seq[i], present);

            // Values strictly between runs are absent.
            let probe = present * 2 + 1;
            match search(&seq, &probe) {
                Some(j) => assert_eq!(seq[j], probe),
                None => assert!(seq.binary_search(&probe).is_err()),
            }
        }
    }
}

#[test]
fn below_and_above_every_element() {
    let seq = sorted_with_duplicates(3, 1_000);
    let first = seq[0];
    let last = seq[seq.len() - 1];
    assert_eq!(search(&seq, &(first - 1)), None);
    assert_eq!(search(&seq, &(last + 1)), None);
    assert_eq!(search(&seq, &i64::MIN), None);
    assert_eq!(search(&seq, &i64::MAX), None);
}

#[test]
fn agrees_with_std_on_presence() {
    let seq = sorted_with_duplicates(11, 2_048);
    for target in seq[0] - 5..seq[seq.len() - 1] + 5 {
        assert_eq!(
            search(&seq, &target).is_some(),
            seq.binary_search(&target).is_ok(),
            "presence disagrees for {target}"
        );
    }
}

#[test]
fn comparator_and_key_variants_match_plain_search() {
    for seq in all_sorted_sequences(6, ALPHABET) {
        for target in targets() {
            let plain = search(&seq, &target);
            assert_eq!(search_by(&seq, |p| p.cmp(&target)), plain);
            assert_eq!(search_by_key(&seq, &target, |p| *p), plain);
        }
    }
}

#[test]
fn string_sequences() {
    let names = ["alpha", "beta", "delta", "gamma", "omega"];
    assert_eq!(search(&names, &"delta"), Some(2));
    assert_eq!(search(&names, &"epsilon"), None);
}

#[test]
fn concurrent_callers_share_input() {
    let seq = std::sync::Arc::new(sorted_with_duplicates(5, 4_096));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let seq = std::sync::Arc::clone(&seq);
            std::thread::spawn(move || {
                let mut results = Vec::new();
                for k in 0..256 {
                    let target = seq[(k * 16 + t) % seq.len()];
                    results.push(search(&seq, &target));
                }
                results
            })
        })
        .collect();
    let outputs: Vec<Vec<Option<usize>>> = handles
        .into_iter()
        .map(|h| h.join().expect("search thread panicked"))
        .collect();
    for (t, results) in outputs.iter().enumerate() {
        for (k, found) in results.iter().enumerate() {
            let target = seq[(k * 16 + t) % seq.len()];
            assert_eq!(*found, search(&seq, &target));
        }
    }
}
