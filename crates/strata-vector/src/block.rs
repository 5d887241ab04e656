//! Owned byte blocks sized in element slots.
//!
//! A [`Block`] is a single contiguous `Box<[u8]>` holding exactly
//! `slots * element_size` bytes. It knows its geometry but not how many
//! slots are logically in use; that is tracked by the owning
//! [`ErasedVec`](crate::ErasedVec).

use strata_core::VectorError;

/// A contiguous byte block divided into fixed-width element slots.
///
/// Blocks are the storage unit of a container. They are never resized in
/// place: growth and shrink build a new block, copy the live prefix, and
/// replace the old one, so a failed allocation leaves the old block
/// untouched.
#[derive(Clone, Debug)]
pub struct Block {
    /// Backing storage. Exactly `slots * element_size` bytes.
    bytes: Box<[u8]>,
    /// Width of one slot in bytes. Never zero.
    element_size: usize,
}

impl Block {
    /// Create a block with no slots and no allocation.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidConfig`] if `element_size` is zero.
    pub fn empty(element_size: usize) -> Result<Self, VectorError> {
        if element_size == 0 {
            return Err(VectorError::InvalidConfig {
                reason: "element_size must be non-zero".to_string(),
            });
        }
        Ok(Self {
            bytes: Box::default(),
            element_size,
        })
    }

    /// Allocate a block of `slots` zero-filled element slots.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidConfig`] if `element_size` is zero,
    /// [`VectorError::CapacityOverflow`] if the byte size does not fit in
    /// `usize`, or [`VectorError::AllocationFailed`] if the allocator
    /// refuses the request.
    pub fn allocate(slots: usize, element_size: usize) -> Result<Self, VectorError> {
        let empty = Self::empty(element_size)?;
        if slots == 0 {
            return Ok(empty);
        }
        let bytes = slots
            .checked_mul(element_size)
            .ok_or(VectorError::CapacityOverflow {
                requested: slots,
                element_size,
            })?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes)
            .map_err(|_| VectorError::AllocationFailed { bytes })?;
        buf.resize(bytes, 0);
        Ok(Self {
            bytes: buf.into_boxed_slice(),
            element_size,
        })
    }

    /// Build a new block of `slots` slots holding a copy of this block's
    /// first `keep` slots.
    ///
    /// # Panics
    ///
    /// Panics if `keep` exceeds either block's slot count.
    pub fn reallocate(&self, slots: usize, keep: usize) -> Result<Self, VectorError> {
        let mut block = Self::allocate(slots, self.element_size)?;
        let live = keep * self.element_size;
        block.bytes[..live].copy_from_slice(&self.bytes[..live]);
        Ok(block)
    }

    /// Number of element slots.
    pub fn slots(&self) -> usize {
        self.bytes.len() / self.element_size
    }

    /// Width of one slot in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Whether this block holds an allocation.
    pub fn is_allocated(&self) -> bool {
        !self.bytes.is_empty()
    }

    /// Bytes of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.slots()`.
    pub fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.element_size;
        &self.bytes[start..start + self.element_size]
    }

    /// Mutable bytes of the slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.slots()`.
    pub fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.element_size;
        &mut self.bytes[start..start + self.element_size]
    }

    /// Bytes of slots `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the block.
    pub fn slots_range(&self, first: usize, last: usize) -> &[u8] {
        &self.bytes[first * self.element_size..last * self.element_size]
    }

    /// Mutable bytes of slots `[first, last)`.
    ///
    /// # Panics
    ///
    /// Panics if the range exceeds the block.
    pub fn slots_range_mut(&mut self, first: usize, last: usize) -> &mut [u8] {
        &mut self.bytes[first * self.element_size..last * self.element_size]
    }

    /// Move slots `[first, last)` so they start at slot `dest`.
    ///
    /// Overlapping source and destination are handled like `memmove`.
    ///
    /// # Panics
    ///
    /// Panics if either range exceeds the block.
    pub fn move_slots(&mut self, first: usize, last: usize, dest: usize) {
        let size = self.element_size;
        self.bytes
            .copy_within(first * size..last * size, dest * size);
    }

    /// The whole block as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.bytes.len()
    }
}
