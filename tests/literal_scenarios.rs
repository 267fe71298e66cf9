mod support;

use card_dp::{solve_with, CardError, Strategy};
use support::{brute_force, CASES};

#[test]
fn correct_strategies_match_expected() {
    for &(n, cards, expected) in CASES {
        for strategy in Strategy::CORRECT {
            assert_eq!(
                solve_with(strategy, n, cards),
                Ok(expected),
                "{strategy} on {cards:?}"
            );
        }
    }
}

#[test]
fn expectations_agree_with_brute_force() {
    for &(_, cards, expected) in CASES {
        assert_eq!(brute_force(cards), expected, "{cards:?}");
    }
}

#[test]
fn empty_sequence_is_zero_not_error() {
    for strategy in Strategy::ALL {
        assert_eq!(solve_with(strategy, 0, &[]), Ok(0), "{strategy}");
    }
}

#[test]
fn all_zero_cards_are_all_taken() {
    for n in 0..=14 {
        let cards = vec![0; n];
        for strategy in Strategy::CORRECT {
            assert_eq!(solve_with(strategy, n, &cards), Ok(n), "{strategy}, n={n}");
        }
    }
}

#[test]
fn repeated_minus_one_takes_nothing() {
    for n in 1..=14 {
        let cards = vec![-1; n];
        for strategy in Strategy::CORRECT {
            assert_eq!(solve_with(strategy, n, &cards), Ok(0), "{strategy}, n={n}");
        }
    }
}

#[test]
fn declared_count_must_match() {
    for strategy in Strategy::ALL {
        assert_eq!(
            solve_with(strategy, 5, &[1, 2, 3]),
            Err(CardError::InvalidArgument {
                declared: 5,
                actual: 3
            }),
            "{strategy}"
        );
    }
}

#[test]
fn overflow_is_an_error_for_every_correct_strategy() {
    let cards = [i64::MAX, 1];
    for strategy in Strategy::CORRECT {
        assert!(
            matches!(
                solve_with(strategy, 2, &cards),
                Err(CardError::SumOverflow { .. })
            ),
            "{strategy}"
        );
    }
}

#[test]
fn large_magnitudes_without_overflow() {
    let cards = [i64::MAX / 2, i64::MAX / 2, -(i64::MAX / 2), i64::MIN];
    for strategy in Strategy::CORRECT {
        assert_eq!(solve_with(strategy, 4, &cards), Ok(3), "{strategy}");
    }
}
