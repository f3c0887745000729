// testbed-data/src/samplers/traits.rs

use crate::error::DataError;
use std::fmt::Debug;

/// One step of a sampler: either a single dataset index or a batch of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    /// A scalar index, as produced by `SequentialSampler` or `RandomSampler`.
    Single(usize),
    /// A list of indices, as produced by batch samplers.
    Batch(Vec<usize>),
}

impl Indices {
    /// Number of dataset indices carried by this step (1 for `Single`).
    pub fn len(&self) -> usize {
        match self {
            Indices::Single(_) => 1,
            Indices::Batch(batch) => batch.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Indices::Batch(_))
    }

    /// Appends every index of this step to `out`, shifted by `offset`.
    ///
    /// `offset` is the start of a dataset inside a concatenation, so
    /// `idx + offset` stays below the concatenated length and cannot overflow.
    pub fn extend_into(self, out: &mut Vec<usize>, offset: usize) {
        match self {
            Indices::Single(idx) => out.push(idx + offset),
            Indices::Batch(batch) => out.extend(batch.into_iter().map(|idx| idx + offset)),
        }
    }

    /// Flattens this step into a list of indices.
    pub fn into_vec(self) -> Vec<usize> {
        match self {
            Indices::Single(idx) => vec![idx],
            Indices::Batch(batch) => batch,
        }
    }
}

impl From<usize> for Indices {
    fn from(idx: usize) -> Self {
        Indices::Single(idx)
    }
}

impl From<Vec<usize>> for Indices {
    fn from(batch: Vec<usize>) -> Self {
        Indices::Batch(batch)
    }
}

/// A Sampler trait that defines how to iterate over indices of a dataset.
///
/// Samplers are used by `DataLoader` to generate a sequence of indices
/// (or batches of indices) to fetch data from a `Dataset`. Every call to
/// `iter` starts a fresh pass, so a sampler can be iterated any number of
/// times.
pub trait Sampler: Debug + Send + Sync {
    /// Returns a fresh iterator over the steps of this sampler.
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_>;

    /// Returns the number of steps a full pass of `iter` yields.
    ///
    /// Length is an optional capability: samplers that cannot know their
    /// length up front keep this default, which fails with
    /// `DataError::LengthUnsupported`.
    fn len(&self) -> Result<usize, DataError> {
        Err(DataError::LengthUnsupported {
            sampler: format!("{:?}", self),
        })
    }

    /// Number of indices per step, for samplers that yield batches.
    fn batch_size(&self) -> Option<usize> {
        None
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        (**self).iter()
    }

    fn len(&self) -> Result<usize, DataError> {
        (**self).len()
    }

    fn batch_size(&self) -> Option<usize> {
        (**self).batch_size()
    }
}

/// Draws the first step of a fresh pass over `sampler`.
///
/// `position` identifies the sampler in error messages when it is one of
/// several wrapped samplers.
pub(crate) fn peek_first<S: Sampler + ?Sized>(
    sampler: &S,
    position: usize,
) -> Result<Indices, DataError> {
    sampler
        .iter()
        .next()
        .ok_or(DataError::EmptySampler { position })
}

#[cfg(test)]
#[path = "traits_test.rs"]
mod tests;
