//! # Pattern Generation Tests
//!
//! Every pattern must be a permutation of the same stride offsets; beyond that
//! each pattern has an exact expected order, checked here on small counts.

use accessbench_core::BenchError;
use accessbench_core::config::BenchConfig;
use accessbench_core::pattern::{IndexBuffer, Pattern, UnknownPattern, generate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

const SEED: u64 = 42;

fn canonical(count: usize, stride: usize) -> Vec<usize> {
    (0..count).map(|i| i * stride).collect()
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

// ══════════════════════════════════════════════════════════
// 1. Shared offset set
// ══════════════════════════════════════════════════════════

#[rstest]
fn every_pattern_is_a_permutation(
    #[values(
        Pattern::Sequential,
        Pattern::Backward,
        Pattern::Interleaved,
        Pattern::Bouncing,
        Pattern::Random
    )]
    pattern: Pattern,
    #[values(1, 2, 7, 8, 512, 1001)] count: usize,
) {
    let offsets = generate(pattern, count, 8, SEED);
    assert_eq!(offsets.len(), count);
    assert_eq!(sorted(offsets), canonical(count, 8));
}

#[test]
fn reference_count_is_a_permutation_for_all_patterns() {
    let config = BenchConfig::default();
    let count = config.index_count();
    let expected = canonical(count, config.stride);
    for pattern in Pattern::ALL {
        let offsets = generate(pattern, count, config.stride, config.shuffle_seed);
        assert!(offsets.iter().all(|&o| o % 8 == 0 && o < config.elements));
        assert_eq!(sorted(offsets), expected, "{pattern}");
    }
}

#[test]
fn empty_count_yields_empty_sequence() {
    for pattern in Pattern::ALL {
        assert!(generate(pattern, 0, 8, SEED).is_empty());
    }
}

proptest! {
    #[test]
    fn prop_permutation_of_stride_set(
        count in 0usize..600,
        stride in 1usize..32,
        seed in any::<u64>(),
        which in 0usize..5,
    ) {
        let pattern = Pattern::ALL[which];
        let offsets = generate(pattern, count, stride, seed);
        prop_assert_eq!(sorted(offsets), canonical(count, stride));
    }
}

// ══════════════════════════════════════════════════════════
// 2. Exact orders
// ══════════════════════════════════════════════════════════

#[test]
fn sequential_ascends() {
    assert_eq!(
        generate(Pattern::Sequential, 8, 8, SEED),
        vec![0, 8, 16, 24, 32, 40, 48, 56]
    );
}

#[test]
fn backward_descends() {
    assert_eq!(
        generate(Pattern::Backward, 8, 8, SEED),
        vec![56, 48, 40, 32, 24, 16, 8, 0]
    );
}

#[rstest]
#[case(1)]
#[case(8)]
#[case(9)]
#[case(4096)]
fn backward_is_reverse_of_sequential(#[case] count: usize) {
    let mut forward = generate(Pattern::Sequential, count, 8, SEED);
    forward.reverse();
    assert_eq!(generate(Pattern::Backward, count, 8, SEED), forward);
}

#[test]
fn interleaved_even_count() {
    assert_eq!(
        generate(Pattern::Interleaved, 8, 8, SEED),
        vec![0, 32, 8, 40, 16, 48, 24, 56]
    );
}

#[test]
fn interleaved_odd_count_gives_extra_to_low_half() {
    // Low half {0, 8, 16}, high half {24, 32}; the extra low element comes last.
    assert_eq!(
        generate(Pattern::Interleaved, 5, 8, SEED),
        vec![0, 24, 8, 32, 16]
    );
}

#[rstest]
#[case(Pattern::Interleaved, vec![0, 32, 8, 40, 16, 48, 24])]
#[case(Pattern::Bouncing, vec![0, 48, 8, 40, 16, 32, 24])]
fn seven_offsets_put_extra_element_last(#[case] pattern: Pattern, #[case] expected: Vec<usize>) {
    assert_eq!(generate(pattern, 7, 8, SEED), expected);
}

#[test]
fn bouncing_even_count() {
    assert_eq!(
        generate(Pattern::Bouncing, 8, 8, SEED),
        vec![0, 56, 8, 48, 16, 40, 24, 32]
    );
}

#[test]
fn bouncing_odd_count_meets_in_the_middle() {
    assert_eq!(
        generate(Pattern::Bouncing, 5, 8, SEED),
        vec![0, 32, 8, 24, 16]
    );
}

#[test]
fn single_element_is_zero_for_every_pattern() {
    for pattern in Pattern::ALL {
        assert_eq!(generate(pattern, 1, 8, SEED), vec![0]);
    }
}

// ══════════════════════════════════════════════════════════
// 3. Determinism
// ══════════════════════════════════════════════════════════

#[rstest]
fn repeated_generation_is_identical(
    #[values(
        Pattern::Sequential,
        Pattern::Backward,
        Pattern::Interleaved,
        Pattern::Bouncing,
        Pattern::Random
    )]
    pattern: Pattern,
) {
    assert_eq!(
        generate(pattern, 4096, 8, SEED),
        generate(pattern, 4096, 8, SEED)
    );
}

/// Offsets produced by `rand` 0.8.5 `StdRng` seeded with 42.
const RANDOM_16_SEED_42: [usize; 16] = [
    88, 8, 48, 64, 40, 72, 120, 104, 0, 32, 96, 80, 112, 24, 56, 16,
];

#[test]
fn random_matches_recorded_reference() {
    assert_eq!(generate(Pattern::Random, 16, 8, 42), RANDOM_16_SEED_42.to_vec());
}

#[test]
fn index_buffer_random_matches_recorded_reference() {
    let mut buffer = IndexBuffer::with_count(16).unwrap();
    buffer.fill(Pattern::Sequential, 8, SEED);
    buffer.fill(Pattern::Random, 8, 42);
    assert_eq!(buffer.as_slice(), RANDOM_16_SEED_42.as_slice());
}

#[test]
fn random_actually_shuffles() {
    let random = generate(Pattern::Random, 512, 8, SEED);
    assert_ne!(random, generate(Pattern::Sequential, 512, 8, SEED));
    assert_ne!(random, generate(Pattern::Backward, 512, 8, SEED));
}

#[test]
fn random_depends_on_seed() {
    assert_ne!(
        generate(Pattern::Random, 512, 8, 42),
        generate(Pattern::Random, 512, 8, 43)
    );
}

#[test]
fn random_ignores_previous_buffer_state() {
    let mut buffer = IndexBuffer::with_count(512).unwrap();
    buffer.fill(Pattern::Random, 8, SEED);
    let first = buffer.as_slice().to_vec();
    buffer.fill(Pattern::Bouncing, 8, SEED);
    buffer.fill(Pattern::Random, 8, SEED);
    assert_eq!(buffer.as_slice(), first.as_slice());
}

// ══════════════════════════════════════════════════════════
// 4. Names
// ══════════════════════════════════════════════════════════

#[test]
fn report_order_and_names() {
    let names: Vec<&str> = Pattern::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec!["Sequential", "Backward", "Interleaved", "Bouncing", "Random"]
    );
    assert_eq!(Pattern::Interleaved.to_string(), "Interleaved");
}

#[rstest]
#[case("Sequential", Pattern::Sequential)]
#[case("backward", Pattern::Backward)]
#[case("INTERLEAVED", Pattern::Interleaved)]
#[case(" bouncing ", Pattern::Bouncing)]
#[case("random", Pattern::Random)]
fn parse_names(#[case] input: &str, #[case] expected: Pattern) {
    assert_eq!(input.parse::<Pattern>(), Ok(expected));
}

#[test]
fn parse_unknown_name() {
    assert_eq!(
        "zigzag".parse::<Pattern>(),
        Err(UnknownPattern("zigzag".to_string()))
    );
}

// ══════════════════════════════════════════════════════════
// 5. Index buffer
// ══════════════════════════════════════════════════════════

#[test]
fn index_buffer_starts_unfilled() {
    let buffer = IndexBuffer::with_count(16).unwrap();
    assert_eq!(buffer.len(), 16);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.pattern(), None);
}

#[test]
fn index_buffer_fill_matches_generate() {
    let mut buffer = IndexBuffer::with_count(1000).unwrap();
    for pattern in Pattern::ALL {
        buffer.fill(pattern, 8, SEED);
        assert_eq!(buffer.pattern(), Some(pattern));
        assert_eq!(buffer.as_slice(), generate(pattern, 1000, 8, SEED).as_slice());
    }
}

#[test]
fn index_buffer_is_fully_overwritten() {
    let mut buffer = IndexBuffer::with_count(7).unwrap();
    buffer.fill(Pattern::Random, 8, SEED);
    buffer.fill(Pattern::Sequential, 8, SEED);
    assert_eq!(buffer.as_slice(), &[0, 8, 16, 24, 32, 40, 48]);
}

#[test]
fn index_buffer_allocation_failure() {
    let err = IndexBuffer::with_count(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        BenchError::Allocation {
            what: "index buffer",
            bytes: usize::MAX
        }
    );
}
