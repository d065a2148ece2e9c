//! `SeqVec`: a growable, contiguous sequence container with identity-checked
//! cursors.
//!
//! `SeqVec` stores elements of an arbitrary clonable type with value
//! semantics, random access, and a pair of cursor types (mutable and
//! read-only) supporting pointer-like traversal and arithmetic. All fallible
//! operations return `Result`; growth and deep copies carry the strong
//! guarantee that a failed operation leaves the container exactly as it was.
//!
//! # Container operations
//!
//! ```
//! use seqvec::SeqVec;
//!
//! let mut seq = SeqVec::new();
//! seq.push_back(1).unwrap();
//! seq.push_back(2).unwrap();
//! seq.push_back(3).unwrap();
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(*seq.at(1).unwrap(), 2);
//! assert_eq!(*seq.front().unwrap(), 1);
//! assert_eq!(*seq.back().unwrap(), 3);
//!
//! seq.erase(1).unwrap();
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
//!
//! seq.insert(1, 5).unwrap();
//! assert_eq!(seq.iter().copied().collect::<Vec<_>>(), vec![1, 5, 3]);
//!
//! assert_eq!(seq.pop_back().unwrap(), 3);
//! ```
//!
//! # Cursors
//!
//! Cursors are non-owning `(container identity, offset)` handles. Offset
//! arithmetic is unchecked; a cursor is validated only when it is resolved
//! through the container, and cursors from different containers never compare
//! equal and cannot be subtracted:
//!
//! ```
//! use seqvec::{SeqVec, SeqVecError};
//!
//! let mut seq = SeqVec::new();
//! seq.push_back("a").unwrap();
//! seq.push_back("b").unwrap();
//!
//! let mut cursor = seq.begin();
//! cursor += 1;
//! assert_eq!(*seq.deref(&cursor).unwrap(), "b");
//! assert_eq!(seq.end().offset_from(&seq.begin()).unwrap(), 2);
//!
//! let other: SeqVec<&str> = SeqVec::new();
//! assert_eq!(
//!     other.begin().offset_from(&seq.begin()),
//!     Err(SeqVecError::InvalidCursor)
//! );
//! ```
//!
//! # Cursor invalidation
//!
//! There is no invalidation tracking. Any structural mutation of the
//! container (growth, insert, erase, clear, assignment) leaves outstanding
//! cursors denoting whatever element now sits at their offset; resolving a
//! cursor whose offset fell outside `[0, len)` reports an error rather than
//! touching freed storage.
//!
//! # Failure semantics
//!
//! The four error kinds are [`SeqVecError::IndexOutOfBounds`],
//! [`SeqVecError::EmptyContainer`], [`SeqVecError::InvalidCursor`], and
//! [`SeqVecError::AllocationFailure`]. Every failing call leaves the
//! container in its prior state, with one documented exception: a panicking
//! element clone during the in-place path of [`SeqVec::assign_from`] leaves a
//! valid but partially transferred container.

mod core;
mod cursor;
mod error;
mod iter;
mod storage;

// Re-export public types and traits
pub use crate::core::SeqVec;
pub use crate::cursor::{Cursor, CursorMut};
pub use crate::error::SeqVecError;
pub use crate::iter::SeqVecIter;
