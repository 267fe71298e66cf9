//! Regression fixture: the naive recursion wired to an inverted comparison.
//!
//! `inverted_max` was meant to return the larger of its arguments and returns
//! the smaller one instead. Whenever taking a card is legal the recursion
//! compares `1 + take` with `skip` through it, so it always settles for the
//! worse branch. Because the all-skip branch bottoms out at 0, the answer is
//! 0 for every input.
//!
//! Do not fix this module. It exists so the test suite can demonstrate that
//! a comparison helper with a flipped operator is caught by the literal and
//! differential checks. It is never a default strategy.

use crate::error::{CardError, CardResult};
use crate::traits::CardSolver;

#[derive(Clone, Copy, Debug, Default)]
pub struct BuggySolver;

impl CardSolver for BuggySolver {
    fn name(&self) -> &'static str {
        "buggy"
    }

    fn solve(&self, n: usize, cards: &[i64]) -> CardResult<usize> {
        CardError::check_len(n, cards)?;
        #[cfg(feature = "tracing")]
        tracing::warn!(cards = n, "running the inverted-comparison fixture");
        buggy_from(cards, 0, 0)
    }
}

fn buggy_from(cards: &[i64], index: usize, running_sum: i64) -> CardResult<usize> {
    let Some(&card) = cards.get(index) else {
        return Ok(0);
    };
    let next = running_sum
        .checked_add(card)
        .ok_or(CardError::SumOverflow { index })?;
    if next >= 0 {
        Ok(inverted_max(
            1 + buggy_from(cards, index + 1, next)?,
            buggy_from(cards, index + 1, running_sum)?,
        ))
    } else {
        buggy_from(cards, index + 1, running_sum)
    }
}

/// Supposed to be `max`. Returns `y` when `x > y`, i.e. the minimum.
fn inverted_max(x: usize, y: usize) -> usize {
    if x > y {
        y
    } else {
        x
    }
}
