// testbed-data/src/samplers/concat_sampler.rs

use super::traits::{peek_first, Indices, Sampler};
use crate::error::DataError;
use log::{debug, trace};

/// Concatenates multiple samplers, each usually drawing from a different
/// dataset, into one sampler yielding combined batches.
///
/// Every step draws one item from each wrapped sampler in order. Indices are
/// shifted by the start of their dataset inside a `ConcatDataset`, so the
/// combined batch addresses the concatenated index space. The pass stops as
/// soon as any wrapped sampler runs out: the output is as long as the
/// shortest wrapped sampler and the partial step is discarded.
///
/// # Example
/// ```rust
/// use testbed_data::samplers::{ConcatSampler, Indices, Sampler, SequentialSampler};
///
/// let samplers: Vec<Box<dyn Sampler>> = vec![
///     Box::new(SequentialSampler::new(3)),
///     Box::new(SequentialSampler::new(5)),
/// ];
/// let sampler = ConcatSampler::new(samplers, Some(&[3, 8][..])).unwrap();
/// let batches: Vec<Indices> = sampler.iter().collect();
/// assert_eq!(
///     batches,
///     vec![
///         Indices::Batch(vec![0, 3]),
///         Indices::Batch(vec![1, 4]),
///         Indices::Batch(vec![2, 5]),
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct ConcatSampler {
    samplers: Vec<Box<dyn Sampler>>,
    offsets: Vec<usize>,
    batch_size: usize,
}

impl ConcatSampler {
    /// Creates a new `ConcatSampler`.
    ///
    /// # Arguments
    ///
    /// * `samplers` - The wrapped samplers, one per dataset.
    /// * `cumulative_dataset_sizes` - Running totals of the dataset lengths
    ///   (as returned by `ConcatDataset::cumulative_sizes`). Sampler `i` is
    ///   offset by the total of the datasets before it. When `None`, indices
    ///   are passed through unchanged.
    ///
    /// # Errors
    ///
    /// * `DataError::InvalidArgument` if no sampler is given or the number of
    ///   cumulative sizes differs from the number of samplers, or the
    ///   cumulative sizes decrease.
    /// * `DataError::EmptySampler` if a wrapped sampler yields nothing.
    pub fn new<I>(samplers: I, cumulative_dataset_sizes: Option<&[usize]>) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Box<dyn Sampler>>,
    {
        let samplers: Vec<Box<dyn Sampler>> = samplers.into_iter().collect();
        if samplers.is_empty() {
            return Err(DataError::InvalidArgument(
                "ConcatSampler needs at least one sampler".to_string(),
            ));
        }

        let mut batch_size = 0;
        for (position, sampler) in samplers.iter().enumerate() {
            batch_size += peek_first(sampler, position)?.len();
        }

        let offsets: Vec<usize> = match cumulative_dataset_sizes {
            Some(sizes) => {
                if sizes.len() != samplers.len() {
                    return Err(DataError::InvalidArgument(format!(
                        "got {} cumulative dataset sizes for {} samplers",
                        sizes.len(),
                        samplers.len()
                    )));
                }
                if let Some(pair) = sizes.windows(2).find(|pair| pair[1] < pair[0]) {
                    return Err(DataError::InvalidArgument(format!(
                        "cumulative dataset sizes must not decrease, got {} after {}",
                        pair[1], pair[0]
                    )));
                }
                std::iter::once(0)
                    .chain(sizes[..sizes.len() - 1].iter().copied())
                    .collect()
            }
            None => vec![0; samplers.len()],
        };

        debug!(
            "ConcatSampler: {} samplers, batch_size={}, offsets={:?}",
            samplers.len(),
            batch_size,
            offsets
        );
        Ok(Self {
            samplers,
            offsets,
            batch_size,
        })
    }

    /// Offset added to the indices of each wrapped sampler.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn num_samplers(&self) -> usize {
        self.samplers.len()
    }
}

impl Sampler for ConcatSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        let mut sampler_iters: Vec<_> = self.samplers.iter().map(|s| s.iter()).collect();
        let offsets = &self.offsets;
        let capacity = self.batch_size;

        Box::new(
            std::iter::from_fn(move || {
                let mut batch = Vec::with_capacity(capacity);
                for (position, (it, &offset)) in sampler_iters.iter_mut().zip(offsets).enumerate() {
                    match it.next() {
                        Some(item) => item.extend_into(&mut batch, offset),
                        None => {
                            trace!("ConcatSampler: sampler {} exhausted, ending pass", position);
                            return None;
                        }
                    }
                }
                Some(Indices::Batch(batch))
            })
            .fuse(),
        )
    }

    /// Length of the shortest wrapped sampler.
    fn len(&self) -> Result<usize, DataError> {
        self.samplers
            .iter()
            .try_fold(usize::MAX, |shortest, sampler| Ok(shortest.min(sampler.len()?)))
    }

    fn batch_size(&self) -> Option<usize> {
        Some(self.batch_size)
    }
}

#[cfg(test)]
#[path = "concat_sampler_test.rs"]
mod tests;
