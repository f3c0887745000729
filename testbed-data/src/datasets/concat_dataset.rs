use super::traits::Dataset;
use crate::error::DataError;

/// Concatenation of several datasets of the same item type.
///
/// Global index `i` addresses dataset `d` at local index
/// `i - cumulative_sizes[d - 1]`. Pair it with a `ConcatSampler` built from
/// `cumulative_sizes()` to draw from every part in each batch.
#[derive(Debug, Clone)]
pub struct ConcatDataset<D: Dataset> {
    datasets: Vec<D>,
    cumulative_sizes: Vec<usize>,
}

impl<D: Dataset> ConcatDataset<D> {
    /// Creates a new `ConcatDataset`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if `datasets` is empty.
    pub fn new(datasets: Vec<D>) -> Result<Self, DataError> {
        if datasets.is_empty() {
            return Err(DataError::InvalidArgument(
                "datasets should not be an empty iterable".to_string(),
            ));
        }
        let cumulative_sizes = datasets
            .iter()
            .scan(0, |total, dataset| {
                *total += dataset.len();
                Some(*total)
            })
            .collect();
        Ok(Self {
            datasets,
            cumulative_sizes,
        })
    }

    /// Running totals of the dataset lengths, e.g. `[3, 8]` for lengths 3 and 5.
    pub fn cumulative_sizes(&self) -> &[usize] {
        &self.cumulative_sizes
    }

    pub fn datasets(&self) -> &[D] {
        &self.datasets
    }
}

impl<D: Dataset> Dataset for ConcatDataset<D> {
    type Item = D::Item;

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        let position = self.cumulative_sizes.partition_point(|&end| end <= index);
        let dataset = self.datasets.get(position).ok_or(DataError::IndexOutOfBounds {
            index,
            len: self.len(),
        })?;
        let start = match position {
            0 => 0,
            _ => self.cumulative_sizes[position - 1],
        };
        dataset.get(index - start)
    }

    fn len(&self) -> usize {
        self.cumulative_sizes.last().copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "concat_dataset_test.rs"]
mod tests;
