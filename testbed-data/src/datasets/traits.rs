// testbed-data/src/datasets/traits.rs

use crate::error::DataError;

/// Trait representing a map-style dataset.
///
/// A dataset provides access to individual data samples via an index in
/// `0..len()`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the data sample at the given index.
    ///
    /// # Errors
    /// Returns `DataError::IndexOutOfBounds` if the index is out of bounds.
    fn get(&self, index: usize) -> Result<Self::Item, DataError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
