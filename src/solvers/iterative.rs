//! Forward dynamic program over reachable running sums.
//!
//! Layers are card positions: the frontier at layer `i` is the
//! [`SumFrontier`] after the first `i` cards. No recursion is involved, so
//! arbitrarily long sequences are fine as long as the set of reachable sums
//! stays manageable (time O(n·K), space O(K) for K distinct sums).
//!
//! Driving [`CardProblem`] through [`FrontierEngine::run`] also recovers which
//! cards an optimal selection takes.

use crate::engine::FrontierEngine;
use crate::error::{CardError, CardResult};
use crate::frontier::SumFrontier;
use crate::traits::{CardSolver, LayeredProblem};

/// The card sequence viewed as a layered problem, one layer per card.
#[derive(Clone, Copy, Debug)]
pub struct CardProblem<'a> {
    cards: &'a [i64],
}

impl<'a> CardProblem<'a> {
    pub fn new(cards: &'a [i64]) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &'a [i64] {
        self.cards
    }
}

/// A point on the reconstructed path: after `layer` cards, the running sum
/// is `sum` and `count` cards have been taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumState {
    pub layer: usize,
    pub sum: i64,
    pub count: usize,
}

impl<'a> LayeredProblem for CardProblem<'a> {
    type State = SumState;
    type Frontier = SumFrontier;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.cards.len()
    }

    fn init_frontier(&self) -> Self::Frontier {
        SumFrontier::new()
    }

    fn forward_step(&self, layer: usize, frontier_i: &Self::Frontier) -> CardResult<Self::Frontier> {
        frontier_i.forward_step(layer, self.cards[layer])
    }

    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State {
        let (sum, count) = frontier_t.best_entry();
        SumState {
            layer: self.cards.len(),
            sum,
            count,
        }
    }

    fn backtrack(
        &self,
        layer: usize,
        frontier_i: &Self::Frontier,
        state_next: &Self::State,
    ) -> Self::State {
        let SumState { sum, count, .. } = *state_next;
        // Skip when the previous layer already had this sum at this count.
        if frontier_i.get(sum) == Some(count) {
            return SumState { layer, sum, count };
        }
        // Otherwise the count was raised by taking this card, which only
        // happens from the best entry at `sum - card`. The subtraction
        // cannot overflow: that entry was added to `card` in the forward pass.
        let prev_sum = sum - self.cards[layer];
        debug_assert_eq!(
            frontier_i.get(prev_sum),
            count.checked_sub(1),
            "no predecessor for sum {sum} at layer {layer}"
        );
        SumState {
            layer,
            sum: prev_sum,
            count: count - 1,
        }
    }

    fn extract_cost(&self, _frontier_t: &Self::Frontier, state_t: &Self::State) -> Self::Cost {
        state_t.count
    }
}

/// One optimal selection: which cards are taken and where the sum ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub count: usize,
    pub final_sum: i64,
    /// Ascending indices of the taken cards.
    pub taken: Vec<usize>,
}

impl Selection {
    /// Read the take decisions off a reconstructed path (`T + 1` states).
    pub fn from_path(path: &[SumState]) -> Self {
        let taken = path
            .windows(2)
            .filter(|w| w[1].count > w[0].count)
            .map(|w| w[0].layer)
            .collect();
        let last = path.last().copied().unwrap_or(SumState {
            layer: 0,
            sum: 0,
            count: 0,
        });
        Self {
            count: last.count,
            final_sum: last.sum,
            taken,
        }
    }

    /// True if replaying the takes over `cards` keeps every running sum
    /// non-negative and reproduces `count` and `final_sum`.
    pub fn is_valid_for(&self, cards: &[i64]) -> bool {
        if self.taken.len() != self.count || self.taken.windows(2).any(|w| w[0] >= w[1]) {
            return false;
        }
        let mut running_sum: i64 = 0;
        for &index in &self.taken {
            let Some(&card) = cards.get(index) else {
                return false;
            };
            match running_sum.checked_add(card) {
                Some(next) if next >= 0 => running_sum = next,
                _ => return false,
            }
        }
        running_sum == self.final_sum
    }
}

/// The recommended strategy: no recursion and no cache keyed by index.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeSolver;

impl IterativeSolver {
    pub fn new() -> Self {
        Self
    }

    /// Solve and return one optimal selection.
    pub fn select(&self, n: usize, cards: &[i64]) -> CardResult<Selection> {
        CardError::check_len(n, cards)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("select", strategy = self.name(), cards = n).entered();
        let (_count, path) = FrontierEngine::new(CardProblem::new(cards)).run()?;
        Ok(Selection::from_path(&path))
    }
}

impl CardSolver for IterativeSolver {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn solve(&self, n: usize, cards: &[i64]) -> CardResult<usize> {
        CardError::check_len(n, cards)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("solve", strategy = self.name(), cards = n).entered();
        FrontierEngine::new(CardProblem::new(cards)).run_cost()
    }
}
