pub mod traits;
pub mod sequential_sampler;
pub mod random_sampler;
pub mod subset_random_sampler;
pub mod batch_sampler;
pub mod concat_sampler;
pub mod multi_batch_sampler;

pub use traits::{Indices, Sampler};
pub use sequential_sampler::SequentialSampler;
pub use random_sampler::RandomSampler;
pub use subset_random_sampler::SubsetRandomSampler;
pub use batch_sampler::BatchSampler;
pub use concat_sampler::ConcatSampler;
pub use multi_batch_sampler::MultiBatchSampler;
