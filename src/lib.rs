//! Maximum card selection under a non-negative running sum.
//!
//! Cards are integers processed left to right. Each card is either taken,
//! adding its value to a running sum, or skipped. A card may be taken only if
//! the running sum stays `>= 0` afterwards. The question is how many cards
//! can be taken.
//!
//! ## Strategies
//! Three interchangeable solvers answer it, trading time, memory and stack
//! depth differently, plus one deliberately wrong fixture:
//! - [`NaiveSolver`]: exhaustive recursion; exponential, only for small inputs.
//! - [`MemoizedSolver`]: recursion cached by (index, sum), one cache per call.
//! - [`IterativeSolver`]: forward DP over reachable sums, no recursion.
//! - [`BuggySolver`]: the recursion with an inverted `max`, kept for
//!   regression tests.
//!
//! The iterative solver is a [`LayeredProblem`] run by [`FrontierEngine`],
//! which can also reconstruct which cards to take while keeping only about
//! √n frontiers in memory.
//!
//! ## Quick start
//! ```
//! use card_dp::{CardSolver, IterativeSolver, MemoizedSolver};
//!
//! let cards = [5, -6, 4, -3, 1];
//! assert_eq!(IterativeSolver.solve(cards.len(), &cards), Ok(4));
//! assert_eq!(MemoizedSolver.solve(cards.len(), &cards), Ok(4));
//!
//! let selection = IterativeSolver.select(cards.len(), &cards).unwrap();
//! assert_eq!(selection.taken, vec![0, 2, 3, 4]);
//! ```

pub mod blocks;
pub mod builder;
pub mod cards;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::FrontierEngineBuilder;
pub use crate::cards::{parse_input, CardSequence};
pub use crate::engine::FrontierEngine;
pub use crate::error::{CardError, CardResult};
pub use crate::frontier::SumFrontier;
pub use crate::solvers::buggy::BuggySolver;
pub use crate::solvers::iterative::{CardProblem, IterativeSolver, Selection, SumState};
pub use crate::solvers::memoized::MemoizedSolver;
pub use crate::solvers::naive::NaiveSolver;
pub use crate::solvers::{solve_batch, solve_with, Strategy};
pub use crate::traits::{CardSolver, LayeredProblem};
