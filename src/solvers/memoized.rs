//! The naive recursion with every (index, running sum) result cached.
//!
//! A subproblem's value depends only on where it starts and the sum carried
//! into it, never on the history that produced that sum, so the first answer
//! computed for a pair can be reused for every later visit.
//!
//! The cache lives for one top-level call. Nothing is kept between calls,
//! so the solver is safe to share across threads and to reuse on unrelated
//! sequences.

use std::collections::HashMap;

use crate::error::{CardError, CardResult};
use crate::traits::CardSolver;
use crate::utils::best_of;

#[derive(Clone, Copy, Debug, Default)]
pub struct MemoizedSolver;

impl MemoizedSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve and also report how many distinct (index, sum) states were
    /// cached along the way.
    pub fn solve_with_stats(&self, n: usize, cards: &[i64]) -> CardResult<(usize, usize)> {
        CardError::check_len(n, cards)?;
        let mut memo = Memo::new(cards);
        let best = memo.best_from(0, 0)?;
        Ok((best, memo.cache.len()))
    }
}

impl CardSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn solve(&self, n: usize, cards: &[i64]) -> CardResult<usize> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("solve", strategy = self.name(), cards = n).entered();
        let (best, _states) = self.solve_with_stats(n, cards)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(states = _states, best, "memo released");
        Ok(best)
    }
}

struct Memo<'a> {
    cards: &'a [i64],
    cache: HashMap<(usize, i64), usize>,
}

impl<'a> Memo<'a> {
    fn new(cards: &'a [i64]) -> Self {
        Self {
            cards,
            cache: HashMap::new(),
        }
    }

    fn best_from(&mut self, index: usize, running_sum: i64) -> CardResult<usize> {
        let Some(&card) = self.cards.get(index) else {
            return Ok(0);
        };
        if let Some(&hit) = self.cache.get(&(index, running_sum)) {
            return Ok(hit);
        }

        let take = match running_sum.checked_add(card) {
            Some(next) if next >= 0 => Some(1 + self.best_from(index + 1, next)?),
            Some(_) => None,
            None => return Err(CardError::SumOverflow { index }),
        };
        let skip = self.best_from(index + 1, running_sum)?;

        let best = best_of(take, skip);
        self.cache.insert((index, running_sum), best);
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_cases() {
        let solver = MemoizedSolver::new();
        assert_eq!(solver.solve(5, &[4, -4, -1, -2, 9]), Ok(4));
        assert_eq!(solver.solve(5, &[5, -6, 4, -3, 1]), Ok(4));
    }

    #[test]
    fn zero_cards_share_one_state_per_index() {
        // Every history keeps the sum at 0, so only n states exist.
        let (best, states) = MemoizedSolver.solve_with_stats(12, &[0; 12]).unwrap();
        assert_eq!(best, 12);
        assert_eq!(states, 12);
    }

    #[test]
    fn cache_does_not_leak_between_calls() {
        let solver = MemoizedSolver::new();
        let first = solver.solve_with_stats(3, &[1, 1, 1]).unwrap();
        // Same (index, sum) keys, different cards: a shared cache would answer 3.
        assert_eq!(solver.solve(3, &[-1, -1, -1]), Ok(0));
        assert_eq!(solver.solve_with_stats(3, &[1, 1, 1]).unwrap(), first);
    }

    #[test]
    fn rejects_count_mismatch() {
        assert!(matches!(
            MemoizedSolver.solve(0, &[1]),
            Err(CardError::InvalidArgument {
                declared: 0,
                actual: 1
            })
        ));
    }
}
