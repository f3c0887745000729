// testbed-data/src/samplers/multi_batch_sampler.rs

use super::traits::{peek_first, Indices, Sampler};
use crate::config::MultiBatchConfig;
use crate::error::DataError;
use log::debug;

/// Merges every `merge_size` consecutive batches of a batch sampler into one
/// larger batch.
///
/// The wrapped sampler must already yield batches (e.g. a `BatchSampler`).
/// With `drop_last`, a trailing group of fewer than `merge_size` batches is
/// discarded; without it, the leftover indices are yielded as a final,
/// shorter batch.
///
/// # Example
/// ```rust
/// use testbed_data::samplers::{BatchSampler, MultiBatchSampler, Sampler, SequentialSampler};
///
/// let batches = BatchSampler::new(SequentialSampler::new(10), 2, false).unwrap();
/// let merged = MultiBatchSampler::new(batches, 2, false).unwrap();
/// assert_eq!(merged.batch_size(), Some(4));
/// assert_eq!(merged.len(), Ok(3));
/// ```
#[derive(Debug, Clone)]
pub struct MultiBatchSampler<S> {
    sampler: S,
    merge_size: usize,
    drop_last: bool,
    batch_size: usize,
}

impl<S: Sampler> MultiBatchSampler<S> {
    /// Creates a new `MultiBatchSampler`.
    ///
    /// # Arguments
    ///
    /// * `sampler` - The batch sampler whose batches get merged.
    /// * `merge_size` - Number of consecutive batches per merged batch.
    /// * `drop_last` - Whether to drop a trailing incomplete merged batch.
    ///
    /// # Errors
    ///
    /// * `DataError::InvalidArgument` if `merge_size` is zero, the wrapped
    ///   sampler yields single indices instead of batches, or its batch size
    ///   is zero.
    /// * `DataError::EmptySampler` if the wrapped sampler yields nothing.
    pub fn new(sampler: S, merge_size: usize, drop_last: bool) -> Result<Self, DataError> {
        if merge_size == 0 {
            return Err(DataError::InvalidArgument(format!(
                "merge_size should be a positive integer value, but got merge_size={}",
                merge_size
            )));
        }
        let first = peek_first(&sampler, 0)?;
        if !first.is_batch() {
            return Err(DataError::InvalidArgument(
                "batch_sampler should yield a list of indices".to_string(),
            ));
        }

        let inner_batch_size = sampler.batch_size().unwrap_or_else(|| first.len());
        if inner_batch_size == 0 {
            return Err(DataError::InvalidArgument(
                "batch_sampler should yield non-empty batches, but its batch size is 0".to_string(),
            ));
        }
        let batch_size = merge_size * inner_batch_size;
        debug!(
            "MultiBatchSampler: merge_size={}, drop_last={}, batch_size={}",
            merge_size, drop_last, batch_size
        );
        Ok(Self {
            sampler,
            merge_size,
            drop_last,
            batch_size,
        })
    }

    /// Creates a `MultiBatchSampler` from a validated configuration.
    pub fn from_config(sampler: S, config: &MultiBatchConfig) -> Result<Self, DataError> {
        config.validate()?;
        Self::new(sampler, config.merge_size, config.drop_last)
    }

    pub fn merge_size(&self) -> usize {
        self.merge_size
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }
}

impl<S: Sampler> Sampler for MultiBatchSampler<S> {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        let mut sampler_iter = self.sampler.iter();
        let merge_size = self.merge_size;
        let batch_size = self.batch_size;

        if self.drop_last {
            Box::new(
                std::iter::from_fn(move || {
                    let mut merged = Vec::with_capacity(batch_size);
                    for _ in 0..merge_size {
                        // Fewer than `merge_size` batches left: drop them.
                        sampler_iter.next()?.extend_into(&mut merged, 0);
                    }
                    Some(Indices::Batch(merged))
                })
                .fuse(),
            )
        } else {
            let mut buffer = Vec::with_capacity(batch_size);
            let mut pending = Vec::<usize>::new().into_iter();
            Box::new(
                std::iter::from_fn(move || loop {
                    for idx in pending.by_ref() {
                        buffer.push(idx);
                        if buffer.len() == batch_size {
                            return Some(Indices::Batch(std::mem::replace(
                                &mut buffer,
                                Vec::with_capacity(batch_size),
                            )));
                        }
                    }
                    match sampler_iter.next() {
                        Some(item) => pending = item.into_vec().into_iter(),
                        None if buffer.is_empty() => return None,
                        None => return Some(Indices::Batch(std::mem::take(&mut buffer))),
                    }
                })
                .fuse(),
            )
        }
    }

    fn len(&self) -> Result<usize, DataError> {
        let len = self.sampler.len()?;
        if self.drop_last {
            Ok(len / self.merge_size)
        } else {
            Ok(len.div_ceil(self.merge_size))
        }
    }

    fn batch_size(&self) -> Option<usize> {
        Some(self.batch_size)
    }
}

#[cfg(test)]
#[path = "multi_batch_sampler_test.rs"]
mod tests;
