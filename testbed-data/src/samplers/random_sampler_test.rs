// testbed-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

fn collect_indices(sampler: &RandomSampler) -> Vec<usize> {
    sampler.iter().flat_map(Indices::into_vec).collect()
}

#[test]
fn test_random_sampler_len_default() {
    let sampler = RandomSampler::new(10, false, None).unwrap();
    assert_eq!(sampler.len(), Ok(10));
}

#[test]
fn test_random_sampler_len_with_num_samples() {
    let sampler = RandomSampler::new(10, false, Some(5)).unwrap();
    assert_eq!(sampler.len(), Ok(5));
}

#[test]
fn test_random_sampler_rejects_invalid_arguments() {
    // More samples than items without replacement
    assert!(matches!(
        RandomSampler::new(5, false, Some(10)),
        Err(DataError::InvalidArgument(_))
    ));
    // Nothing to draw from
    assert!(RandomSampler::new(0, true, Some(3)).is_err());
    // Zero samples, explicit or defaulted from an empty dataset
    assert!(matches!(
        RandomSampler::new(10, false, Some(0)),
        Err(DataError::InvalidArgument(_))
    ));
    assert!(matches!(
        RandomSampler::new(10, true, Some(0)),
        Err(DataError::InvalidArgument(_))
    ));
    assert!(matches!(
        RandomSampler::new(0, false, None),
        Err(DataError::InvalidArgument(_))
    ));
}

#[test]
fn test_random_sampler_iter_no_replacement_less_than_dataset() {
    let dataset_len = 10;
    let num_samples = 5;
    let sampler = RandomSampler::new(dataset_len, false, Some(num_samples)).unwrap();
    let indices = collect_indices(&sampler);
    assert_eq!(indices.len(), num_samples);
    let unique_indices: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique_indices.len(), num_samples);
    for index in unique_indices {
        assert!(index < dataset_len);
    }
}

#[test]
fn test_random_sampler_iter_no_replacement_is_permutation() {
    let dataset_len = 7;
    let sampler = RandomSampler::new(dataset_len, false, None).unwrap();
    let mut indices = collect_indices(&sampler);
    indices.sort_unstable();
    assert_eq!(indices, (0..dataset_len).collect::<Vec<_>>());
}

#[test]
fn test_random_sampler_iter_with_replacement_more_than_dataset() {
    let dataset_len = 5;
    let num_samples = 10;
    let sampler = RandomSampler::new(dataset_len, true, Some(num_samples)).unwrap();
    let indices = collect_indices(&sampler);
    assert_eq!(indices.len(), num_samples);
    // Duplicates are allowed with replacement, only bounds are checked.
    for &index in &indices {
        assert!(index < dataset_len);
    }
}

#[test]
fn test_random_sampler_seeded_passes_repeat() {
    let sampler = RandomSampler::new(50, false, None).unwrap().with_seed(42);
    assert_eq!(collect_indices(&sampler), collect_indices(&sampler));

    let other = RandomSampler::new(50, false, None).unwrap().with_seed(43);
    assert_ne!(collect_indices(&sampler), collect_indices(&other));
}
