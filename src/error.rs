//! Error type shared by every solver, the input parser and the binaries.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Everything that can go wrong between reading a card sequence and
/// producing a count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The declared card count disagrees with the number of values supplied.
    #[error("invalid argument: declared {declared} cards but {actual} were supplied")]
    InvalidArgument { declared: usize, actual: usize },

    /// Taking the card at `index` would overflow the running sum.
    #[error("running sum overflowed i64 when taking card {index}")]
    SumOverflow { index: usize },

    /// A token on an input line is not an integer of the expected kind.
    #[error("line {line}: cannot parse '{token}' as an integer")]
    Parse { line: usize, token: String },

    /// A required input line is absent.
    #[error("missing {0}")]
    MissingLine(&'static str),
}

impl CardError {
    /// Check the declared count against the supplied slice.
    pub(crate) fn check_len(declared: usize, cards: &[i64]) -> CardResult<()> {
        if declared == cards.len() {
            Ok(())
        } else {
            Err(CardError::InvalidArgument {
                declared,
                actual: cards.len(),
            })
        }
    }
}
