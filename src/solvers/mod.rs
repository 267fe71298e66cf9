//! Solver strategies for the max-card problem.
//!
//! All of them implement [`CardSolver`](crate::traits::CardSolver):
//! - [`naive`]     : exhaustive recursion, small-input oracle.
//! - [`memoized`]  : the same recursion with a per-call (index, sum) cache.
//! - [`iterative`] : forward DP over reachable sums; the production choice.
//! - [`buggy`]     : inverted-comparison regression fixture, wrong on purpose.

pub mod buggy;
pub mod iterative;
pub mod memoized;
pub mod naive;

use std::fmt;
use std::str::FromStr;

use crate::cards::CardSequence;
use crate::error::CardResult;
use crate::traits::CardSolver;

use self::buggy::BuggySolver;
use self::iterative::IterativeSolver;
use self::memoized::MemoizedSolver;
use self::naive::NaiveSolver;

/// Selects one of the solver implementations by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    Naive,
    Memoized,
    #[default]
    Iterative,
    Buggy,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::Memoized,
        Strategy::Iterative,
        Strategy::Buggy,
    ];

    /// The strategies that honor the contract.
    pub const CORRECT: [Strategy; 3] = [Strategy::Naive, Strategy::Memoized, Strategy::Iterative];

    pub fn solver(self) -> &'static dyn CardSolver {
        match self {
            Strategy::Naive => &NaiveSolver,
            Strategy::Memoized => &MemoizedSolver,
            Strategy::Iterative => &IterativeSolver,
            Strategy::Buggy => &BuggySolver,
        }
    }

    pub fn name(self) -> &'static str {
        self.solver().name()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|s| s.name() == value)
            .ok_or_else(|| {
                format!("unknown strategy '{value}'; expected naive, memoized, iterative or buggy")
            })
    }
}

/// Run `strategy` on `cards` with declared count `n`.
pub fn solve_with(strategy: Strategy, n: usize, cards: &[i64]) -> CardResult<usize> {
    strategy.solver().solve(n, cards)
}

/// Solve many independent sequences, results in input order.
///
/// With the `parallel` feature the cases are spread over the rayon pool.
/// Every case builds its own solver state, so the result is the same either
/// way.
#[cfg(feature = "parallel")]
pub fn solve_batch(strategy: Strategy, cases: &[CardSequence]) -> Vec<CardResult<usize>> {
    use rayon::prelude::*;

    cases
        .par_iter()
        .map(|cards| strategy.solver().solve_sequence(cards))
        .collect()
}

/// Solve many independent sequences, results in input order.
#[cfg(not(feature = "parallel"))]
pub fn solve_batch(strategy: Strategy, cases: &[CardSequence]) -> Vec<CardResult<usize>> {
    cases
        .iter()
        .map(|cards| strategy.solver().solve_sequence(cards))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    #[test]
    fn names_round_trip() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
            assert_eq!(s.to_string(), s.name());
        }
        assert!("fast".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::Iterative);
    }

    #[test]
    fn correct_strategies_agree_on_sample() {
        let cards = [3, -4, 2, -1, 2, -1];
        for s in Strategy::CORRECT {
            assert_eq!(solve_with(s, cards.len(), &cards), Ok(5), "{s}");
        }
    }

    #[test]
    fn every_strategy_rejects_mismatch() {
        for s in Strategy::ALL {
            assert_eq!(
                solve_with(s, 2, &[1]),
                Err(CardError::InvalidArgument {
                    declared: 2,
                    actual: 1
                }),
                "{s}"
            );
        }
    }

    #[test]
    fn batch_preserves_order() {
        let cases: Vec<CardSequence> = vec![
            vec![0, 0, 0].into(),
            vec![-1, -2].into(),
            Vec::<i64>::new().into(),
            vec![2, -1, -1, -1].into(),
        ];
        let out: Vec<_> = solve_batch(Strategy::Memoized, &cases)
            .into_iter()
            .map(Result::unwrap)
            .collect();
        assert_eq!(out, vec![3, 0, 0, 3]);
    }
}
