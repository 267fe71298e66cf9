//! Small helpers shared by the engine and the recursive solvers.

/// Checkpoint block size for `num_layers` layers: `ceil(sqrt(T))`, at least 1.
///
/// With this size the engine holds about √T frontiers during reconstruction,
/// whether they are checkpoints or the recomputed inside of one block.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut b = (num_layers as f64).sqrt() as usize;
    // Float rounding can land one off either way for large T.
    while b * b > num_layers {
        b -= 1;
    }
    while b * b < num_layers {
        b += 1;
    }
    b
}

/// Larger of an optional take branch and the always-legal skip branch.
///
/// `None` stands for a take that would drive the running sum negative and
/// therefore never wins.
#[inline]
pub fn best_of(take: Option<usize>, skip: usize) -> usize {
    match take {
        Some(take) if take > skip => take,
        _ => skip,
    }
}
