use thiserror::Error;

/// Error types for `SeqVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SeqVecError {
    /// Index is beyond the permitted range for the operation
    #[error("Index out of bounds: index {index} is beyond length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the container
        length: usize,
    },
    /// Operation attempted on an empty container
    #[error("Operation on empty container")]
    EmptyContainer,
    /// Cursor argument is not bound to the container instance being operated on
    #[error("Cursor is not bound to this container instance")]
    InvalidCursor,
    /// The underlying allocator could not satisfy a storage request
    #[error("Allocation failure: could not reserve storage for {requested} elements")]
    AllocationFailure {
        /// Number of element slots requested
        requested: usize,
    },
}
