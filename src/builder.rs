use crate::traits::LayeredProblem;
use crate::utils::default_block_size;
use crate::FrontierEngine;

/// Builder for [`FrontierEngine`] when the checkpoint spacing matters.
pub struct FrontierEngineBuilder<P: LayeredProblem> {
    problem: P,
    block_size: Option<usize>,
}

impl<P: LayeredProblem> FrontierEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            block_size: None,
        }
    }
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }
    pub fn build(self) -> FrontierEngine<P> {
        let b = self
            .block_size
            .unwrap_or_else(|| default_block_size(self.problem.num_layers()));
        FrontierEngine::with_block_size(self.problem, b)
    }
}
