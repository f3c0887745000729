// testbed-data/src/samplers/subset_random_sampler.rs

use super::random_sampler::pass_rng;
use super::traits::{Indices, Sampler};
use crate::error::DataError;
use rand::seq::SliceRandom;

/// A sampler that randomly samples indices from a provided subset of indices.
#[derive(Debug, Clone)]
pub struct SubsetRandomSampler {
    indices: Vec<usize>,
    seed: Option<u64>,
}

impl SubsetRandomSampler {
    /// Creates a new `SubsetRandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `indices`: A vector of indices from which to sample randomly.
    pub fn new(indices: Vec<usize>) -> Self {
        SubsetRandomSampler {
            indices,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Sampler for SubsetRandomSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        if self.indices.is_empty() {
            return Box::new(std::iter::empty());
        }
        let mut rng = pass_rng(self.seed);
        let mut shuffled = self.indices.clone();
        shuffled.shuffle(&mut rng);
        Box::new(shuffled.into_iter().map(Indices::Single))
    }

    fn len(&self) -> Result<usize, DataError> {
        Ok(self.indices.len())
    }
}

#[cfg(test)]
#[path = "subset_random_sampler_test.rs"]
mod tests;
