pub mod traits;
pub mod vec_dataset;
pub mod concat_dataset;

pub use traits::Dataset;
pub use vec_dataset::VecDataset;
pub use concat_dataset::ConcatDataset;
