use thiserror::Error;

/// Error type shared by the samplers, datasets and loader of this crate.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum DataError {
    /// A constructor or configuration received an argument it cannot accept.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A wrapped sampler produced nothing when its first item was inspected.
    #[error("Sampler at position {position} produced no items")]
    EmptySampler { position: usize },

    /// `len()` was requested from a sampler that cannot report its length.
    #[error("Length query is not supported by {sampler}")]
    LengthUnsupported { sampler: String },

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
