use thiserror::Error;

/// Error types for `SeqList` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SeqListError {
    /// Index is beyond the current list length
    #[error("Index out of range: index {index} is beyond list length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the list
        length: usize,
    },
    /// A list cannot be created with zero capacity
    #[error("Invalid capacity: {capacity}, capacity must be greater than zero")]
    InvalidCapacity {
        /// Capacity that was requested
        capacity: usize,
    },
    /// Natural ordering is undefined for at least one pair of elements
    #[error("Incomparable elements: natural ordering is undefined for this list")]
    IncomparableElements,
}

pub type Result<T> = core::result::Result<T, SeqListError>;
