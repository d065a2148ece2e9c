use core::ops::{Index, IndexMut};

use crate::cursor::{Cursor, CursorMut, SeqId};
use crate::error::SeqVecError;
use crate::iter::SeqVecIter;
use crate::storage::SlotBuf;

/// A growable, contiguous sequence container with identity-checked cursors.
///
/// Elements live at offsets `[0, len)`; slots `[len, capacity)` are allocated
/// but unconstructed. Growth follows an amortized doubling policy and is
/// transactional: a failed reallocation (allocation error or panicking element
/// clone) leaves the container exactly as it was.
#[derive(Debug)]
pub struct SeqVec<T> {
    storage: SlotBuf<T>,
    len: usize,
    id: SeqId,
}

impl<T> SeqVec<T> {
    /// Creates an empty container with zero capacity. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: SlotBuf::empty(),
            len: 0,
            id: SeqId::next(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the container can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::IndexOutOfBounds` when `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, SeqVecError> {
        self.storage
            .get(index)
            .filter(|_| index < self.len)
            .ok_or(SeqVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::IndexOutOfBounds` when `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, SeqVecError> {
        let length = self.len;
        if index >= length {
            return Err(SeqVecError::IndexOutOfBounds { index, length });
        }
        self.storage
            .get_mut(index)
            .ok_or(SeqVecError::IndexOutOfBounds { index, length })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::EmptyContainer` when the container is empty.
    pub fn front(&self) -> Result<&T, SeqVecError> {
        if self.len == 0 {
            return Err(SeqVecError::EmptyContainer);
        }
        self.at(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::EmptyContainer` when the container is empty.
    pub fn back(&self) -> Result<&T, SeqVecError> {
        if self.len == 0 {
            return Err(SeqVecError::EmptyContainer);
        }
        self.at(self.len - 1)
    }

    /// Destroys all live elements. Capacity and buffer identity are
    /// preserved; no reallocation takes place.
    pub fn clear(&mut self) {
        self.storage.destroy_range(0, self.len);
        self.len = 0;
    }

    /// Removes the last element and returns it.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::EmptyContainer` when the container is empty.
    #[allow(clippy::expect_used)]
    pub fn pop_back(&mut self) -> Result<T, SeqVecError> {
        if self.len == 0 {
            return Err(SeqVecError::EmptyContainer);
        }
        self.len -= 1;
        Ok(self
            .storage
            .take(self.len)
            .expect("slots below len hold live elements"))
    }

    /// Read-only cursor at offset 0.
    #[must_use]
    pub fn begin(&self) -> Cursor {
        Cursor {
            owner: self.id,
            pos: 0,
        }
    }

    /// Read-only cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor {
        Cursor {
            owner: self.id,
            pos: self.len,
        }
    }

    /// Mutable cursor at offset 0.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut {
        CursorMut {
            owner: self.id,
            pos: 0,
        }
    }

    /// Mutable cursor one past the last element.
    #[must_use]
    pub fn end_mut(&mut self) -> CursorMut {
        CursorMut {
            owner: self.id,
            pos: self.len,
        }
    }

    /// Resolves a read-only cursor to a reference.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the cursor is bound to a
    /// different container instance, and `SeqVecError::IndexOutOfBounds` when
    /// its offset is outside `[0, len)`.
    pub fn deref(&self, cursor: &Cursor) -> Result<&T, SeqVecError> {
        if cursor.owner != self.id {
            return Err(SeqVecError::InvalidCursor);
        }
        self.at(cursor.pos)
    }

    /// Resolves a mutable cursor to a mutable reference.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the cursor is bound to a
    /// different container instance, and `SeqVecError::IndexOutOfBounds` when
    /// its offset is outside `[0, len)`.
    pub fn deref_mut(&mut self, cursor: &CursorMut) -> Result<&mut T, SeqVecError> {
        if cursor.owner != self.id {
            return Err(SeqVecError::InvalidCursor);
        }
        self.at_mut(cursor.pos)
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> SeqVecIter<'_, T> {
        self.into_iter()
    }

    fn cursor_mut_at(&self, pos: usize) -> CursorMut {
        CursorMut {
            owner: self.id,
            pos,
        }
    }
}

impl<T: Clone> SeqVec<T> {
    /// Ensures capacity for at least `need` elements.
    ///
    /// A no-op when `need <= capacity()`. Otherwise reallocates to
    /// `max(need, max(1, capacity * 2))` with the strong guarantee: on
    /// allocation failure (or a panicking element clone while carrying
    /// elements over) the container is left unmodified. Reallocation leaves
    /// previously issued cursors denoting the same offsets of the new buffer.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if the new buffer cannot be
    /// allocated.
    pub fn reserve(&mut self, need: usize) -> Result<(), SeqVecError> {
        let capacity = self.storage.capacity();
        if need <= capacity {
            return Ok(());
        }
        let doubled = core::cmp::max(1, capacity * 2);
        let new_capacity = core::cmp::max(need, doubled);
        self.storage.grow_to(self.len, new_capacity)
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if growth is needed and the
    /// allocator cannot satisfy it; the container is left unmodified.
    pub fn push_back(&mut self, value: T) -> Result<(), SeqVecError> {
        self.reserve(self.len + 1)?;
        self.storage.put(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting elements at `[index, len)` one
    /// slot rightward. Returns a mutable cursor at `index`.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::IndexOutOfBounds` when `index > len`, and
    /// `SeqVecError::AllocationFailure` if growth fails. Either failure
    /// leaves the container unmodified.
    #[allow(clippy::expect_used)]
    pub fn insert(&mut self, index: usize, value: T) -> Result<CursorMut, SeqVecError> {
        if index > self.len {
            return Err(SeqVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.reserve(self.len + 1)?;

        // Relocate from the highest offset down so no live element is
        // overwritten before it has been moved out.
        let mut i = self.len;
        while i > index {
            let moved = self
                .storage
                .take(i - 1)
                .expect("slots below len hold live elements");
            self.storage.put(i, moved);
            i -= 1;
        }
        self.storage.put(index, value);
        self.len += 1;
        Ok(self.cursor_mut_at(index))
    }

    /// Inserts `value` at the cursor's position.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the cursor is bound to a
    /// different container instance; otherwise as [`SeqVec::insert`].
    pub fn insert_at(&mut self, cursor: &CursorMut, value: T) -> Result<CursorMut, SeqVecError> {
        if cursor.owner != self.id {
            return Err(SeqVecError::InvalidCursor);
        }
        self.insert(cursor.pos, value)
    }

    /// Removes the element at `index`, shifting elements at `(index, len)`
    /// one slot leftward. Returns a cursor at `index`, which now denotes the
    /// element that followed the erased one (or the end).
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::IndexOutOfBounds` when `index >= len`.
    #[allow(clippy::expect_used)]
    pub fn erase(&mut self, index: usize) -> Result<CursorMut, SeqVecError> {
        if index >= self.len {
            return Err(SeqVecError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        self.storage.take(index);

        // Relocate ascending so each source slot is read before it is vacated.
        for i in index..self.len - 1 {
            let moved = self
                .storage
                .take(i + 1)
                .expect("slots below len hold live elements");
            self.storage.put(i, moved);
        }
        self.len -= 1;
        Ok(self.cursor_mut_at(index))
    }

    /// Removes the element at the cursor's position.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::InvalidCursor` when the cursor is bound to a
    /// different container instance; otherwise as [`SeqVec::erase`].
    pub fn erase_at(&mut self, cursor: &CursorMut) -> Result<CursorMut, SeqVecError> {
        if cursor.owner != self.id {
            return Err(SeqVecError::InvalidCursor);
        }
        self.erase(cursor.pos)
    }

    /// Deep-copies the container into fresh storage sized exactly to the
    /// source length. The copy has its own identity: cursors bound to the
    /// source do not address it.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if storage cannot be
    /// allocated; nothing is leaked and the source is untouched.
    pub fn try_clone(&self) -> Result<Self, SeqVecError> {
        Ok(Self {
            storage: self.storage.duplicate(self.len, self.len)?,
            len: self.len,
            id: SeqId::next(),
        })
    }

    /// Replaces this container's contents with a deep copy of `source`.
    /// Identity is retained, so cursors previously issued by `self` stay
    /// bound to it (denoting whatever now sits at their offsets).
    ///
    /// When `source.len() > capacity()`, the replacement storage is built
    /// fully before the old storage is released (strong guarantee). When the
    /// source fits, elements are transferred in place: overlapping slots are
    /// destroyed and reconstructed, extra source elements constructed, and
    /// surplus old elements destroyed. A panicking element clone mid-transfer
    /// leaves the container valid but partially transferred; callers relying
    /// on the failure point get exactly the prefix that was copied.
    ///
    /// Self-assignment cannot arise: `self` and `source` cannot alias under
    /// the borrow rules.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if replacement storage cannot
    /// be allocated; the container is left unmodified in that case.
    #[allow(clippy::expect_used)]
    pub fn assign_from(&mut self, source: &SeqVec<T>) -> Result<(), SeqVecError> {
        if source.len > self.storage.capacity() {
            self.storage = source.storage.duplicate(source.len, source.len)?;
            self.len = source.len;
            return Ok(());
        }

        let overlap = core::cmp::min(self.len, source.len);
        for i in 0..overlap {
            let value = source
                .storage
                .get(i)
                .expect("slots below len hold live elements")
                .clone();
            self.storage.replace(i, value);
        }
        for i in overlap..source.len {
            let value = source
                .storage
                .get(i)
                .expect("slots below len hold live elements")
                .clone();
            self.storage.put(i, value);
        }
        if source.len < self.len {
            self.storage.destroy_range(source.len, self.len);
        }
        self.len = source.len;
        Ok(())
    }
}

impl<T> Default for SeqVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SeqVec<T> {
    /// Deep copy via [`SeqVec::try_clone`].
    ///
    /// # Panics
    ///
    /// Panics on allocation failure, as std containers do; use `try_clone`
    /// to observe it as an error.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone().expect("allocation failure during clone")
    }
}

impl<T> Index<usize> for SeqVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds; use [`SeqVec::at`] for a fallible
    /// lookup.
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "Index {} out of bounds for container of length {}",
                index, self.len
            ),
        }
    }
}

impl<T> IndexMut<usize> for SeqVec<T> {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; use [`SeqVec::at_mut`] for a
    /// fallible lookup.
    fn index_mut(&mut self, index: usize) -> &mut T {
        let length = self.len;
        match self.at_mut(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "Index {} out of bounds for container of length {}",
                index, length
            ),
        }
    }
}
