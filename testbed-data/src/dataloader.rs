// dataloader.rs
//! # DataLoader
//!
//! Le module `DataLoader` associe un dataset à un sampler de batches et produit, à chaque pas
//! du sampler, le batch d'items correspondant.
//!
//! ## Exemple d'utilisation basique
//!
//! ```rust
//! use testbed_data::dataloader::DataLoader;
//! use testbed_data::datasets::{ConcatDataset, Dataset, VecDataset};
//! use testbed_data::samplers::{ConcatSampler, Sampler, SequentialSampler};
//!
//! let dataset = ConcatDataset::new(vec![
//!     VecDataset::new(vec![1, 2, 3]),
//!     VecDataset::new(vec![10, 20, 30, 40, 50]),
//! ])
//! .unwrap();
//! let samplers: Vec<Box<dyn Sampler>> = dataset
//!     .datasets()
//!     .iter()
//!     .map(|d| Box::new(SequentialSampler::new(d.len())) as Box<dyn Sampler>)
//!     .collect();
//! let sampler = ConcatSampler::new(samplers, Some(dataset.cumulative_sizes())).unwrap();
//! let loader = DataLoader::new(dataset, sampler, None);
//! for batch in loader.iter() {
//!     let batch = batch.expect("Pas d'erreur attendue");
//!     println!("Batch : {:?}", batch);
//! }
//! ```
//!
//! ## Fonctionnalités principales
//!
//! - Batching piloté par le sampler (`BatchSampler`, `ConcatSampler`, `MultiBatchSampler`, ...)
//! - Fonction de collation personnalisable
//! - Plusieurs passes sur les mêmes données (`iter` repart du début à chaque appel)

use crate::datasets::Dataset;
use crate::error::DataError;
use crate::samplers::{Indices, Sampler};

/// Collate function applied to each batch of items fetched from the dataset.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, DataError>
        + Send
        + Sync,
>;

/// Generic loader pairing a dataset with a sampler.
///
/// # Type parameters
/// - `D`: The dataset type, implementing [`Dataset`].
/// - `S`: The sampler type, implementing [`Sampler`]. A sampler yielding
///   single indices produces one-item batches.
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    /// The sampler deciding which indices make up each batch.
    pub sampler: S,
    /// Optional collate function applied to every batch.
    pub collate_fn: Option<CollateFn<D>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    pub fn new(dataset: D, sampler: S, collate_fn: Option<CollateFn<D>>) -> Self {
        Self {
            dataset,
            sampler,
            collate_fn,
        }
    }

    /// Number of batches in a full pass, as reported by the sampler.
    pub fn len(&self) -> Result<usize, DataError> {
        self.sampler.len()
    }

    pub fn is_empty(&self) -> Result<bool, DataError> {
        Ok(self.len()? == 0)
    }

    /// Starts a new pass over the data.
    ///
    /// Each item is `Ok(batch)` or the first error hit while fetching or
    /// collating that batch.
    pub fn iter(&self) -> impl Iterator<Item = Result<Vec<D::Item>, DataError>> + '_ {
        self.sampler.iter().map(move |indices| self.load(indices))
    }

    fn load(&self, indices: Indices) -> Result<Vec<D::Item>, DataError> {
        let batch = indices
            .into_vec()
            .into_iter()
            .map(|idx| self.dataset.get(idx))
            .collect::<Result<Vec<_>, _>>()?;
        match self.collate_fn {
            Some(ref collate_fn) => collate_fn(batch),
            None => Ok(batch),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
