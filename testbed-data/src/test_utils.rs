// Helpers shared by the unit tests of this crate.

use crate::samplers::{Indices, Sampler};
use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

pub(crate) fn setup_logger() {
    LOGGER_INIT.call_once(|| {
        // Attempt to initialize env_logger. If it fails (e.g., already initialized), that's okay.
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Replays a fixed list of steps on every pass.
#[derive(Debug, Clone)]
pub(crate) struct FixedSampler {
    items: Vec<Indices>,
}

impl FixedSampler {
    pub(crate) fn new(items: Vec<Indices>) -> Self {
        FixedSampler { items }
    }

    pub(crate) fn batches(batches: Vec<Vec<usize>>) -> Self {
        Self::new(batches.into_iter().map(Indices::Batch).collect())
    }
}

impl Sampler for FixedSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        Box::new(self.items.iter().cloned())
    }

    fn len(&self) -> Result<usize, crate::DataError> {
        Ok(self.items.len())
    }

    fn batch_size(&self) -> Option<usize> {
        match self.items.first() {
            Some(Indices::Batch(batch)) => Some(batch.len()),
            _ => None,
        }
    }
}

/// Yields `0..count` as scalar indices but keeps the default `len`, like a
/// streaming source whose size is unknown up front.
#[derive(Debug, Clone)]
pub(crate) struct UnsizedSampler {
    count: usize,
}

impl UnsizedSampler {
    pub(crate) fn new(count: usize) -> Self {
        UnsizedSampler { count }
    }
}

impl Sampler for UnsizedSampler {
    fn iter(&self) -> Box<dyn Iterator<Item = Indices> + Send + Sync + '_> {
        Box::new((0..self.count).map(Indices::Single))
    }
}
