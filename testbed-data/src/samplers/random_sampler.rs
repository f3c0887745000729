// testbed-data/src/samplers/random_sampler.rs

use super::traits::{Indices, Sampler};
use crate::error::DataError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Builds the RNG for one pass: seeded samplers replay the same order on
/// every pass, unseeded ones draw fresh entropy.
pub(crate) fn pass_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// A sampler that randomly samples indices from a dataset.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    dataset_len: usize,
    replacement: bool,
    num_samples: usize,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Creates a new `RandomSampler`.
    ///
    /// # Arguments
    ///
    /// * `dataset_len`: Number of items in the sampled dataset.
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The total number of samples to draw. If `None`, it defaults to the dataset size.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if no samples would be drawn
    /// (including the default on an empty dataset), if more samples than
    /// items are requested without replacement, or if samples are requested
    /// from an empty dataset.
    pub fn new(
        dataset_len: usize,
        replacement: bool,
        num_samples: Option<usize>,
    ) -> Result<Self, DataError> {
        let num_samples = num_samples.unwrap_or(dataset_len);
        if num_samples == 0 {
            return Err(DataError::InvalidArgument(
                "num_samples should be a positive integer value, but got num_samples=0".to_string(),
            ));
        }
        if !replacement && num_samples > dataset_len {
            return Err(DataError::InvalidArgument(format!(
                "num_samples ({}) exceeds dataset_len ({}) without replacement",
                num_samples, dataset_len
            )));
        }
        if dataset_len == 0 && num_samples > 0 {
            return Err(DataError::InvalidArgument(format!(
                "cannot draw {} samples from an empty dataset",
                num_samples
            )));
        }
        Ok(RandomSampler {
            dataset_len,
            replacement,
            num_samples,
            seed: None,
        })
    }

    /// Fixes the RNG seed so every pass yields the same order.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Sampler for RandomSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        let mut rng = pass_rng(self.seed);
        let indices: Vec<usize> = if self.replacement {
            (0..self.num_samples)
                .map(|_| rng.gen_range(0..self.dataset_len))
                .collect()
        } else {
            let mut indices: Vec<usize> = (0..self.dataset_len).collect();
            indices.shuffle(&mut rng);
            indices.truncate(self.num_samples);
            indices
        };
        Box::new(indices.into_iter().map(Indices::Single))
    }

    fn len(&self) -> Result<usize, DataError> {
        Ok(self.num_samples)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
