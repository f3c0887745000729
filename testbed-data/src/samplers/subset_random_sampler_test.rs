// testbed-data/src/samplers/subset_random_sampler_test.rs

use super::*;
use std::collections::HashSet;

fn collect_indices(sampler: &SubsetRandomSampler) -> Vec<usize> {
    sampler.iter().flat_map(Indices::into_vec).collect()
}

#[test]
fn test_subset_random_sampler_new() {
    let indices = vec![1, 2, 3];
    let sampler = SubsetRandomSampler::new(indices.clone());
    assert_eq!(sampler.indices, indices);
}

#[test]
fn test_subset_random_sampler_len() {
    assert_eq!(SubsetRandomSampler::new(vec![]).len(), Ok(0));
    assert_eq!(SubsetRandomSampler::new(vec![10, 20, 5]).len(), Ok(3));
}

#[test]
fn test_subset_random_sampler_iter_non_empty() {
    let source_indices = vec![1, 5, 2, 8, 3];
    let sampler = SubsetRandomSampler::new(source_indices.clone());
    let iterated_indices = collect_indices(&sampler);

    assert_eq!(iterated_indices.len(), source_indices.len());

    let iterated_set: HashSet<usize> = iterated_indices.into_iter().collect();
    let source_set: HashSet<usize> = source_indices.into_iter().collect();
    assert_eq!(iterated_set, source_set, "All original indices must be present in the output exactly once");
}

#[test]
fn test_subset_random_sampler_iter_empty() {
    let sampler = SubsetRandomSampler::new(vec![]);
    assert_eq!(sampler.iter().next(), None);
}

#[test]
fn test_subset_random_sampler_seeded_passes_repeat() {
    let sampler = SubsetRandomSampler::new((0..100).collect()).with_seed(7);
    let first = collect_indices(&sampler);
    assert_eq!(first, collect_indices(&sampler));
    // 100 elements left in place by a seeded shuffle would be a broken shuffle
    assert_ne!(first, (0..100).collect::<Vec<_>>());
}
