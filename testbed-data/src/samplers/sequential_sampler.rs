// testbed-data/src/samplers/sequential_sampler.rs

use super::traits::{Indices, Sampler};
use crate::error::DataError;

/// Samples elements sequentially, always in the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialSampler {
    dataset_len: usize,
}

impl SequentialSampler {
    /// Creates a new `SequentialSampler` over `0..dataset_len`.
    pub fn new(dataset_len: usize) -> Self {
        SequentialSampler { dataset_len }
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        Box::new((0..self.dataset_len).map(Indices::Single))
    }

    fn len(&self) -> Result<usize, DataError> {
        Ok(self.dataset_len)
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
