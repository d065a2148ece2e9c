use crate::error::SeqVecError;

/// Owned slot buffer backing a `SeqVec`.
///
/// Each slot either holds a constructed element (`Some`) or is allocated but
/// empty (`None`). The buffer itself has no notion of a live count; the owning
/// container keeps slots `[0, len)` constructed and everything above empty.
#[derive(Debug)]
pub(crate) struct SlotBuf<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuf<T> {
    /// Returns a zero-capacity buffer without allocating.
    pub(crate) fn empty() -> Self {
        Self { slots: Box::new([]) }
    }

    /// Allocates storage for `n` elements without constructing any of them.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if the underlying allocator
    /// cannot satisfy the request.
    pub(crate) fn allocate(n: usize) -> Result<Self, SeqVecError> {
        let mut slots: Vec<Option<T>> = Vec::new();
        slots
            .try_reserve_exact(n)
            .map_err(|_| SeqVecError::AllocationFailure { requested: n })?;
        slots.resize_with(n, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots, constructed or not.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Constructs an element in the slot at `index`.
    ///
    /// The slot must be empty; constructing over a live element would drop it
    /// out of order with the container's bookkeeping.
    pub(crate) fn put(&mut self, index: usize, value: T) {
        debug_assert!(
            self.slots[index].is_none(),
            "slot {} already holds a live element",
            index
        );
        self.slots[index] = Some(value);
    }

    /// Destroys the element at `index`, leaving the slot empty.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Destroy-then-reconstruct in place; used by in-place copy assignment.
    pub(crate) fn replace(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    /// Destroys elements at offsets `[lo, hi)` in ascending order.
    ///
    /// Never releases storage; the slots stay allocated and empty.
    pub(crate) fn destroy_range(&mut self, lo: usize, hi: usize) {
        for slot in &mut self.slots[lo..hi] {
            *slot = None;
        }
    }
}

impl<T: Clone> SlotBuf<T> {
    /// Builds a fresh buffer of `capacity` slots with the live prefix
    /// `[0, live)` cloned from this one in ascending order.
    ///
    /// Transactional: on allocation failure the source is untouched, and if
    /// an element clone panics the partially built buffer is torn down during
    /// unwinding while the source remains as it was.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if storage for `capacity`
    /// slots cannot be reserved.
    pub(crate) fn duplicate(&self, live: usize, capacity: usize) -> Result<Self, SeqVecError> {
        debug_assert!(live <= capacity);
        let mut next = Self::allocate(capacity)?;
        for (dst, src) in next.slots.iter_mut().zip(&self.slots[..live]) {
            *dst = src.clone();
        }
        Ok(next)
    }

    /// Replaces this buffer with one of `new_capacity` slots, carrying over
    /// the live prefix `[0, live)`.
    ///
    /// Only on full success are the old buffer and its elements released.
    ///
    /// # Errors
    ///
    /// Returns `SeqVecError::AllocationFailure` if the new buffer cannot be
    /// allocated; the current buffer is left unmodified.
    pub(crate) fn grow_to(&mut self, live: usize, new_capacity: usize) -> Result<(), SeqVecError> {
        *self = self.duplicate(live, new_capacity)?;
        Ok(())
    }
}
