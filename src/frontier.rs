//! The sum frontier: every non-negative running sum reachable after a prefix
//! of the cards, paired with the most cards any valid history used to get
//! there.
//!
//! Invariants held after every step:
//! - the baseline entry `0 -> 0` ("nothing taken yet") is present,
//! - every key is `>= 0`,
//! - each count is the maximum over all histories ending at that sum.

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;

use crate::error::{CardError, CardResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SumFrontier {
    best: BTreeMap<i64, usize>,
}

impl Default for SumFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl SumFrontier {
    /// Frontier before any card: only the empty selection.
    pub fn new() -> Self {
        let mut best = BTreeMap::new();
        best.insert(0, 0);
        Self { best }
    }

    /// Process card `card` (at position `index`) and return the next frontier.
    ///
    /// Skipping keeps every entry; taking is tried from the entries of
    /// `self` only, never from entries added in this same step.
    pub fn forward_step(&self, index: usize, card: i64) -> CardResult<Self> {
        let mut next = self.best.clone();
        for (&sum, &count) in &self.best {
            let taken = sum
                .checked_add(card)
                .ok_or(CardError::SumOverflow { index })?;
            if taken < 0 {
                continue;
            }
            let candidate = count + 1;
            match next.entry(taken) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    if *slot.get() < candidate {
                        slot.insert(candidate);
                    }
                }
            }
        }
        Ok(Self { best: next })
    }

    /// Best count recorded for exactly `sum`.
    pub fn get(&self, sum: i64) -> Option<usize> {
        self.best.get(&sum).copied()
    }

    /// Highest count on the frontier; the smallest sum wins ties.
    pub fn best_entry(&self) -> (i64, usize) {
        let mut winner = (0, 0);
        for (&sum, &count) in &self.best {
            if count > winner.1 {
                winner = (sum, count);
            }
        }
        winner
    }

    /// Highest count on the frontier.
    pub fn best(&self) -> usize {
        self.best_entry().1
    }

    /// Number of distinct reachable sums.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Never true for a frontier built through this API; kept for symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Entries in ascending sum order.
    pub fn iter(&self) -> btree_map::Iter<'_, i64, usize> {
        self.best.iter()
    }
}

impl<'a> IntoIterator for &'a SumFrontier {
    type Item = (&'a i64, &'a usize);
    type IntoIter = btree_map::Iter<'a, i64, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cards: &[i64]) -> SumFrontier {
        cards
            .iter()
            .enumerate()
            .try_fold(SumFrontier::new(), |f, (i, &c)| f.forward_step(i, c))
            .unwrap()
    }

    #[test]
    fn starts_with_baseline_only() {
        let f = SumFrontier::new();
        assert_eq!(f.len(), 1);
        assert_eq!(f.get(0), Some(0));
        assert_eq!(f.best(), 0);
    }

    #[test]
    fn negative_card_from_baseline_is_skipped() {
        let f = run(&[-3]);
        assert_eq!(f.iter().collect::<Vec<_>>(), vec![(&0, &0)]);
    }

    #[test]
    fn single_step_reads_pre_card_snapshot() {
        // Taking 2 from {0:0} gives {2:1}; a reused card would also add {4:2}.
        let f = run(&[2]);
        assert_eq!(f.get(0), Some(0));
        assert_eq!(f.get(2), Some(1));
        assert_eq!(f.get(4), None);
    }

    #[test]
    fn keeps_best_count_per_sum() {
        // Sum 1 is reachable as {1} (one card) or {3,-2} (two cards).
        let f = run(&[3, 1, -2]);
        assert_eq!(f.get(1), Some(2));
        assert_eq!(f.get(2), Some(3));
        assert_eq!(f.best(), 3);
    }

    #[test]
    fn baseline_survives_every_step() {
        let f = run(&[5, -6, 4, -3, 1, -100, 7]);
        assert!(f.get(0).is_some());
        assert!(f.iter().all(|(&s, _)| s >= 0));
        assert!(f.iter().all(|(_, &c)| c <= 7));
    }

    #[test]
    fn best_entry_prefers_highest_count() {
        // {0:0, 1:1, 2:1, 3:2}
        assert_eq!(run(&[1, 2]).best_entry(), (3, 2));
        // {0:3, 1:2, 2:1, 3:4, 4:3, 5:2}
        assert_eq!(run(&[2, -1, -1, 3]).best_entry(), (3, 4));
    }

    #[test]
    fn best_entry_breaks_ties_on_smallest_sum() {
        // Three cards reach both {3,2,-4} = 1 and {3,2,-2} = 3; four never fit.
        let f = run(&[3, 2, -4, -2]);
        assert_eq!(f.get(1), Some(3));
        assert_eq!(f.get(3), Some(3));
        assert_eq!(f.best_entry(), (1, 3));
    }

    #[test]
    fn overflow_is_reported_with_index() {
        let err = run_err(&[i64::MAX, 1]);
        assert_eq!(err, CardError::SumOverflow { index: 1 });
    }

    fn run_err(cards: &[i64]) -> CardError {
        cards
            .iter()
            .enumerate()
            .try_fold(SumFrontier::new(), |f, (i, &c)| f.forward_step(i, c))
            .unwrap_err()
    }
}
