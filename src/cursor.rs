use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::SeqVecError;

/// Identity of a container instance.
///
/// Every `SeqVec` is tagged with a fresh id at construction, so a cursor can
/// be checked against the container it was issued by. Ids compare by identity,
/// never by container contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeqId(u64);

impl SeqId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Read-only cursor bound to a `SeqVec` instance and a position.
///
/// A cursor is a non-owning `(container identity, offset)` handle. Offset
/// arithmetic never touches the container and performs no bounds checking:
/// the offset may transiently leave `[0, len]` and is only validated when the
/// cursor is resolved through [`SeqVec::deref`](crate::SeqVec::deref).
///
/// There is no invalidation tracking. After a structural mutation of the
/// bound container (growth, insert, erase, clear, assignment), an outstanding
/// cursor simply denotes whatever element now sits at its offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub(crate) owner: SeqId,
    pub(crate) pos: usize,
}

/// Mutable cursor bound to a `SeqVec` instance and a position.
///
/// Same contract as [`Cursor`]; additionally accepted by the mutating
/// cursor-based operations (`insert_at`, `erase_at`,
/// [`SeqVec::deref_mut`](crate::SeqVec::deref_mut)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMut {
    pub(crate) owner: SeqId,
    pub(crate) pos: usize,
}

impl Cursor {
    /// Current offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Signed distance from `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the two cursors are bound to
    /// different container instances.
    pub fn offset_from(&self, other: &Cursor) -> Result<isize, SeqVecError> {
        if self.owner != other.owner {
            return Err(SeqVecError::InvalidCursor);
        }
        Ok(self.pos.wrapping_sub(other.pos) as isize)
    }
}

impl CursorMut {
    /// Current offset of the cursor.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Signed distance from `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the two cursors are bound to
    /// different container instances.
    pub fn offset_from(&self, other: &CursorMut) -> Result<isize, SeqVecError> {
        if self.owner != other.owner {
            return Err(SeqVecError::InvalidCursor);
        }
        Ok(self.pos.wrapping_sub(other.pos) as isize)
    }
}

impl From<CursorMut> for Cursor {
    fn from(cursor: CursorMut) -> Self {
        Self {
            owner: cursor.owner,
            pos: cursor.pos,
        }
    }
}

impl PartialEq<CursorMut> for Cursor {
    fn eq(&self, other: &CursorMut) -> bool {
        self.owner == other.owner && self.pos == other.pos
    }
}

impl PartialEq<Cursor> for CursorMut {
    fn eq(&self, other: &Cursor) -> bool {
        self.owner == other.owner && self.pos == other.pos
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    fn add(mut self, n: usize) -> Cursor {
        self.pos = self.pos.wrapping_add(n);
        self
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    fn sub(mut self, n: usize) -> Cursor {
        self.pos = self.pos.wrapping_sub(n);
        self
    }
}

impl AddAssign<usize> for Cursor {
    fn add_assign(&mut self, n: usize) {
        self.pos = self.pos.wrapping_add(n);
    }
}

impl SubAssign<usize> for Cursor {
    fn sub_assign(&mut self, n: usize) {
        self.pos = self.pos.wrapping_sub(n);
    }
}

impl Add<usize> for CursorMut {
    type Output = CursorMut;

    fn add(mut self, n: usize) -> CursorMut {
        self.pos = self.pos.wrapping_add(n);
        self
    }
}

impl Sub<usize> for CursorMut {
    type Output = CursorMut;

    fn sub(mut self, n: usize) -> CursorMut {
        self.pos = self.pos.wrapping_sub(n);
        self
    }
}

impl AddAssign<usize> for CursorMut {
    fn add_assign(&mut self, n: usize) {
        self.pos = self.pos.wrapping_add(n);
    }
}

impl SubAssign<usize> for CursorMut {
    fn sub_assign(&mut self, n: usize) {
        self.pos = self.pos.wrapping_sub(n);
    }
}
