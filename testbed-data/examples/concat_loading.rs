//! Walkthrough: sample two datasets side by side, then merge the combined
//! batches two at a time.
//!
//! Run with `RUST_LOG=debug cargo run --example concat_loading` to see the
//! samplers' construction logs.

use testbed_data::datasets::{ConcatDataset, Dataset, VecDataset};
use testbed_data::samplers::{BatchSampler, ConcatSampler, MultiBatchSampler, RandomSampler, Sampler};
use testbed_data::{DataError, DataLoader};

fn main() -> Result<(), DataError> {
    env_logger::init();

    let questions = VecDataset::new((0..6).map(|i| format!("question-{i}")).collect());
    let captions = VecDataset::new((0..9).map(|i| format!("caption-{i}")).collect());
    let dataset = ConcatDataset::new(vec![questions, captions])?;

    // One shuffled batch sampler per part: 1 question and 2 captions per step
    let samplers: Vec<Box<dyn Sampler>> = vec![
        Box::new(BatchSampler::new(
            RandomSampler::new(dataset.datasets()[0].len(), false, None)?,
            1,
            false,
        )?),
        Box::new(BatchSampler::new(
            RandomSampler::new(dataset.datasets()[1].len(), false, None)?,
            2,
            false,
        )?),
    ];
    let concat = ConcatSampler::new(samplers, Some(dataset.cumulative_sizes()))?;
    println!(
        "--- ConcatSampler: {} steps of {:?} indices ---",
        concat.len()?,
        concat.batch_size()
    );

    let merged = MultiBatchSampler::new(concat, 2, false)?;
    let loader = DataLoader::new(dataset, merged, None);
    println!("--- MultiBatchSampler: {} merged batches ---", loader.len()?);
    for (i, batch) in loader.iter().enumerate() {
        println!("Batch {i} : {:?}", batch?);
    }
    Ok(())
}
