//! Block checkpoints kept by the engine between the forward pass and
//! reconstruction.
//!
//! A `BlockCheckpoint` covers layers [start, end) and stores the frontier
//! at `start`, which is enough to recompute every frontier inside the block.

#[derive(Debug, Clone)]
pub struct BlockCheckpoint<F> {
    /// Inclusive start layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
    /// Frontier at layer `start`.
    pub frontier: F,
}

impl<F> BlockCheckpoint<F> {
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Layers covered by this block, in forward order.
    #[inline]
    pub fn layers(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::BlockCheckpoint;

    #[test]
    fn zero_length_block_is_empty() {
        let b = BlockCheckpoint {
            start: 5,
            end: 5,
            frontier: (),
        };
        assert_eq!(b.len(), 0);
        assert!(b.is_empty());
        assert_eq!(b.layers().count(), 0);
    }

    #[test]
    fn typical_block_covers_its_layers() {
        let b = BlockCheckpoint {
            start: 3,
            end: 6,
            frontier: vec![0u8],
        };
        assert_eq!(b.len(), 3);
        assert!(!b.is_empty());
        assert_eq!(b.layers().collect::<Vec<_>>(), vec![3, 4, 5]);
    }
}
