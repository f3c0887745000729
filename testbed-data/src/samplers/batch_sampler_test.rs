// testbed-data/src/samplers/batch_sampler_test.rs

use super::*;
use crate::samplers::SequentialSampler;
use crate::test_utils::{FixedSampler, UnsizedSampler};

fn batches_of<S: Sampler>(sampler: &S) -> Vec<Vec<usize>> {
    sampler.iter().map(Indices::into_vec).collect()
}

#[test]
fn test_batches_full() {
    let sampler = BatchSampler::new(SequentialSampler::new(10), 2, false).unwrap();
    assert_eq!(
        batches_of(&sampler),
        vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7], vec![8, 9]]
    );
    assert_eq!(sampler.len(), Ok(5));
}

#[test]
fn test_batches_keep_last() {
    let sampler = BatchSampler::new(SequentialSampler::new(10), 3, false).unwrap();
    assert_eq!(
        batches_of(&sampler),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
    );
    assert_eq!(sampler.len(), Ok(4));
}

#[test]
fn test_batches_drop_last() {
    let sampler = BatchSampler::new(SequentialSampler::new(10), 3, true).unwrap();
    assert_eq!(
        batches_of(&sampler),
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]
    );
    assert_eq!(sampler.len(), Ok(3));
    assert!(sampler.drop_last());
}

#[test]
fn test_rejects_zero_batch_size() {
    assert!(matches!(
        BatchSampler::new(SequentialSampler::new(4), 0, false),
        Err(DataError::InvalidArgument(_))
    ));
}

#[test]
fn test_rejects_batch_yielding_sampler() {
    let inner = FixedSampler::batches(vec![vec![0, 1]]);
    assert!(matches!(
        BatchSampler::new(inner, 2, false),
        Err(DataError::InvalidArgument(_))
    ));
}

#[test]
fn test_empty_sampler_yields_nothing() {
    let sampler = BatchSampler::new(SequentialSampler::new(0), 4, false).unwrap();
    assert_eq!(sampler.iter().count(), 0);
    assert_eq!(sampler.len(), Ok(0));
}

#[test]
fn test_len_requires_wrapped_len() {
    let sampler = BatchSampler::new(UnsizedSampler::new(6), 2, false).unwrap();
    assert_eq!(sampler.iter().count(), 3);
    assert!(matches!(
        sampler.len(),
        Err(DataError::LengthUnsupported { .. })
    ));
}
