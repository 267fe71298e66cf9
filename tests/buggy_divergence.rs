mod support;

use card_dp::{solve_with, BuggySolver, CardSolver, Strategy};
use proptest::prelude::*;
use support::CASES;

#[test]
fn fixture_diverges_on_literal_scenarios() {
    let diverging: Vec<_> = CASES
        .iter()
        .filter(|&&(n, cards, expected)| BuggySolver.solve(n, cards).unwrap() != expected)
        .map(|&(_, cards, _)| cards)
        .collect();
    assert!(!diverging.is_empty(), "inverted max went unnoticed");
    // Every scenario with a non-zero answer exposes it.
    assert_eq!(diverging.len(), 6);
}

#[test]
fn fixture_only_agrees_where_the_answer_is_zero() {
    for &(n, cards, expected) in CASES {
        let buggy = BuggySolver.solve(n, cards).unwrap();
        assert_eq!(buggy, 0, "{cards:?}");
        assert_eq!(buggy == expected, expected == 0, "{cards:?}");
    }
}

#[test]
fn fixture_is_not_a_default_path() {
    assert_ne!(Strategy::default(), Strategy::Buggy);
    assert!(!Strategy::CORRECT.contains(&Strategy::Buggy));
}

proptest! {
    #[test]
    fn fixture_never_over_counts(cards in prop::collection::vec(-5i64..=5, 0..10)) {
        let n = cards.len();
        let buggy = solve_with(Strategy::Buggy, n, &cards).unwrap();
        let correct = solve_with(Strategy::Iterative, n, &cards).unwrap();
        prop_assert!(buggy <= correct);
        prop_assert_eq!(buggy == correct, correct == 0);
    }
}
