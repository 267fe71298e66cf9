#![cfg(feature = "parallel")]

use card_dp::{solve_batch, solve_with, CardSequence, Strategy};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_cases(seed: u64, count: usize, max_len: usize) -> Vec<CardSequence> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..=max_len);
            (0..n).map(|_| rng.gen_range(-5..=5)).collect::<Vec<i64>>().into()
        })
        .collect()
}

#[test]
fn batch_matches_one_by_one() {
    let cases = random_cases(11, 256, 14);
    for strategy in Strategy::ALL {
        let batch = solve_batch(strategy, &cases);
        let single: Vec<_> = cases
            .iter()
            .map(|c| solve_with(strategy, c.len(), c.as_slice()))
            .collect();
        assert_eq!(batch, single, "{strategy}");
    }
}

#[test]
fn memo_state_stays_per_case_under_parallelism() {
    // Same lengths, opposite signs: a cache shared between cases would mix them.
    let positive: Vec<CardSequence> = (0..64).map(|_| vec![1i64; 12].into()).collect();
    let negative: Vec<CardSequence> = (0..64).map(|_| vec![-1i64; 12].into()).collect();
    let interleaved: Vec<CardSequence> = positive
        .iter()
        .zip(&negative)
        .flat_map(|(p, n)| [p.clone(), n.clone()])
        .collect();
    let out = solve_batch(Strategy::Memoized, &interleaved);
    for (i, result) in out.into_iter().enumerate() {
        let expected = if i % 2 == 0 { 12 } else { 0 };
        assert_eq!(result, Ok(expected), "case {i}");
    }
}

proptest! {
    #[test]
    fn parallel_batch_agrees_across_strategies(seed in 0u64..1_000) {
        let cases = random_cases(seed, 32, 10);
        let memoized = solve_batch(Strategy::Memoized, &cases);
        let iterative = solve_batch(Strategy::Iterative, &cases);
        prop_assert_eq!(memoized, iterative);
    }
}
