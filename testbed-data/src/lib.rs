//! Index samplers for iterating training data over concatenated datasets.
//!
//! - [`samplers::ConcatSampler`] draws one step from each per-dataset sampler
//!   and combines them into a single batch over the concatenated index space.
//! - [`samplers::MultiBatchSampler`] merges consecutive batches of a batch
//!   sampler into larger batches.
//!
//! Both implement [`samplers::Sampler`], so they nest and feed a
//! [`DataLoader`].

pub mod config;
pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export main components
pub use config::MultiBatchConfig;
pub use dataloader::DataLoader;
pub use datasets::{ConcatDataset, Dataset, VecDataset};
pub use error::DataError;
pub use samplers::{ConcatSampler, Indices, MultiBatchSampler, Sampler};
