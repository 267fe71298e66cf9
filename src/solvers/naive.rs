//! Plain recursion over (index, running sum), no caching.
//!
//! Both branches are explored at every card, so the running time is
//! exponential in the number of cards. Useful as an oracle for short
//! sequences (roughly 20 cards or fewer); the recursion depth equals the
//! number of cards.

use crate::error::{CardError, CardResult};
use crate::traits::CardSolver;
use crate::utils::best_of;

#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveSolver;

impl NaiveSolver {
    pub fn new() -> Self {
        Self
    }
}

impl CardSolver for NaiveSolver {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn solve(&self, n: usize, cards: &[i64]) -> CardResult<usize> {
        CardError::check_len(n, cards)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("solve", strategy = self.name(), cards = n).entered();
        best_from(cards, 0, 0)
    }
}

/// Most cards takeable from `cards[index..]` when the running sum is
/// `running_sum`.
fn best_from(cards: &[i64], index: usize, running_sum: i64) -> CardResult<usize> {
    let Some(&card) = cards.get(index) else {
        return Ok(0);
    };

    let take = match running_sum.checked_add(card) {
        Some(next) if next >= 0 => Some(1 + best_from(cards, index + 1, next)?),
        Some(_) => None,
        None => return Err(CardError::SumOverflow { index }),
    };
    let skip = best_from(cards, index + 1, running_sum)?;

    Ok(best_of(take, skip))
}
