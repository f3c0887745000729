// testbed-data/src/samplers/batch_sampler.rs

use super::traits::{peek_first, Indices, Sampler};
use crate::error::DataError;
use log::debug;

/// Wraps a scalar [`Sampler`] to yield mini-batches of indices.
///
/// Each pass produces successive `Indices::Batch` steps holding up to
/// `batch_size` indices drawn from the wrapped sampler. With `drop_last`,
/// a final batch smaller than `batch_size` is discarded.
///
/// # Example
/// ```rust
/// use testbed_data::samplers::{BatchSampler, Indices, Sampler, SequentialSampler};
///
/// let sampler = BatchSampler::new(SequentialSampler::new(5), 2, false).unwrap();
/// let batches: Vec<Indices> = sampler.iter().collect();
/// assert_eq!(batches.last(), Some(&Indices::Batch(vec![4])));
/// ```
#[derive(Debug, Clone)]
pub struct BatchSampler<S> {
    sampler: S,
    batch_size: usize,
    drop_last: bool,
}

impl<S: Sampler> BatchSampler<S> {
    /// Creates a new `BatchSampler`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if `batch_size` is zero or if the
    /// wrapped sampler already yields batches.
    pub fn new(sampler: S, batch_size: usize, drop_last: bool) -> Result<Self, DataError> {
        if batch_size == 0 {
            return Err(DataError::InvalidArgument(format!(
                "batch_size should be a positive integer value, but got batch_size={}",
                batch_size
            )));
        }
        // An empty wrapped sampler is fine here, it just yields no batches.
        if let Ok(first) = peek_first(&sampler, 0) {
            if first.is_batch() {
                return Err(DataError::InvalidArgument(
                    "BatchSampler expects a sampler yielding single indices".to_string(),
                ));
            }
        }
        debug!(
            "BatchSampler: batch_size={}, drop_last={}",
            batch_size, drop_last
        );
        Ok(Self {
            sampler,
            batch_size,
            drop_last,
        })
    }

    pub fn drop_last(&self) -> bool {
        self.drop_last
    }
}

impl<S: Sampler> Sampler for BatchSampler<S> {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        let mut sampler_iter = self.sampler.iter();
        let batch_size = self.batch_size;
        let drop_last = self.drop_last;

        Box::new(
            std::iter::from_fn(move || {
                let mut mini_batch = Vec::with_capacity(batch_size);
                while mini_batch.len() < batch_size {
                    match sampler_iter.next() {
                        Some(item) => item.extend_into(&mut mini_batch, 0),
                        None => break,
                    }
                }
                if mini_batch.len() == batch_size || (!drop_last && !mini_batch.is_empty()) {
                    Some(Indices::Batch(mini_batch))
                } else {
                    None
                }
            })
            .fuse(),
        )
    }

    fn len(&self) -> Result<usize, DataError> {
        let len = self.sampler.len()?;
        if self.drop_last {
            Ok(len / self.batch_size)
        } else {
            Ok(len.div_ceil(self.batch_size))
        }
    }

    fn batch_size(&self) -> Option<usize> {
        Some(self.batch_size)
    }
}

#[cfg(test)]
#[path = "batch_sampler_test.rs"]
mod tests;
