//! Card sequences and the two-line text format read by the harness.
//!
//! The text format is:
//! ```text
//! 5
//! 4 -4 -1 -2 9
//! ```
//! The first line is the declared count, the second the values. A declared
//! count of zero may omit the second line.

use crate::error::{CardError, CardResult};

/// An immutable, ordered sequence of card values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSequence {
    values: Vec<i64>,
}

impl CardSequence {
    /// Wrap values whose length is authoritative.
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    /// Build from a declared count plus values, rejecting a mismatch.
    pub fn with_count(declared: usize, values: Vec<i64>) -> CardResult<Self> {
        CardError::check_len(declared, &values)?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl From<Vec<i64>> for CardSequence {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

impl AsRef<[i64]> for CardSequence {
    fn as_ref(&self) -> &[i64] {
        &self.values
    }
}

/// Parse the harness input: a count line followed by a values line.
pub fn parse_input(text: &str) -> CardResult<CardSequence> {
    let mut lines = text.lines();

    let count_line = lines
        .next()
        .ok_or(CardError::MissingLine("card count line"))?;
    let count_token = count_line.trim();
    if count_token.is_empty() {
        return Err(CardError::MissingLine("card count line"));
    }
    let declared = count_token.parse::<usize>().map_err(|_| CardError::Parse {
        line: 1,
        token: count_token.to_string(),
    })?;

    let values = match lines.next() {
        Some(line) => parse_values(line, 2)?,
        None if declared == 0 => Vec::new(),
        None => return Err(CardError::MissingLine("card values line")),
    };

    CardSequence::with_count(declared, values)
}

fn parse_values(line: &str, line_no: usize) -> CardResult<Vec<i64>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| CardError::Parse {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}
