//! Example: recover which cards an optimal selection takes.
//!
//! Run with:
//! `cargo run --example selection`

use card_dp::{CardSolver, FrontierEngine, IterativeSolver, Selection, Strategy};
use card_dp::solvers::iterative::CardProblem;

fn main() {
    let cards = [3, -4, 2, -1, 2, -1];

    for strategy in Strategy::ALL {
        let answer = strategy.solver().solve(cards.len(), &cards);
        println!("{strategy:>9}: {answer:?}");
    }

    let selection = IterativeSolver
        .select(cards.len(), &cards)
        .expect("small literal input");
    println!("taken indices: {:?}", selection.taken);
    println!("running sums:  {:?}", running_sums(&cards, &selection));

    // A smaller block size keeps more checkpoints and recomputes less.
    let engine = FrontierEngine::with_block_size(CardProblem::new(&cards), 2);
    let (count, path) = engine.run().expect("small literal input");
    println!("count {count} over {} path states", path.len());
    for state in &path {
        println!(
            "  after {} cards: sum={} taken={}",
            state.layer, state.sum, state.count
        );
    }
}

/// Running sum after each taken card.
fn running_sums(cards: &[i64], selection: &Selection) -> Vec<i64> {
    selection
        .taken
        .iter()
        .scan(0i64, |sum, &i| {
            *sum += cards[i];
            Some(*sum)
        })
        .collect()
}
