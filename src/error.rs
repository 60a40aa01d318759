use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `extract_max` was called on a queue with no items.
    #[error("cannot extract from an empty priority queue")]
    EmptyQueue,

    /// `update_priority` named a slot that holds no item.
    #[error("no item at position {position}; queue holds {len} items")]
    InvalidPosition { position: usize, len: usize },

    /// A value could not be encoded. The queue has already been restored
    /// by the time this is returned.
    #[error("failed to encode priority queue: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("failed to decode priority queue: {0}")]
    Decoding(#[source] serde_json::Error),
}
