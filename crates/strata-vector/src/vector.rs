//! The type-erased storage container.
//!
//! [`ErasedVec`] owns a [`Block`] and tracks how many of its slots hold
//! live elements. All payloads cross the API as byte slices of exactly
//! `element_size` bytes; the `*_value` helpers wrap them for types
//! implementing [`Element`].

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::slice::ChunksExact;

use strata_core::{ContainerId, Element, Generation, VectorConfig, VectorError};
use tracing::{debug, trace};

use crate::block::Block;
use crate::position::Position;

/// A growable contiguous array of fixed-width, untyped elements.
///
/// Invariants, upheld by every operation including failing ones:
/// - `len <= capacity`
/// - the block holds an allocation iff `capacity > 0`
/// - only slots `[0, len)` hold meaningful elements
///
/// Operations that reallocate the block or move elements (growth,
/// `reserve`, `shrink_to_fit`, `insert`, `erase`, `assign`, `clear`,
/// `swap`) advance the container's generation, invalidating every
/// [`Position`] issued before the call.
pub struct ErasedVec {
    block: Block,
    len: usize,
    growth_factor: f64,
    id: ContainerId,
    generation: Generation,
}

impl ErasedVec {
    /// Create a container of `initial_count` elements of `element_size`
    /// bytes each.
    ///
    /// The container starts with `size == capacity == initial_count`;
    /// element content is unspecified (currently zero-filled).
    ///
    /// # Errors
    ///
    /// See [`VectorConfig::validate`] and [`Block::allocate`].
    pub fn new(
        element_size: usize,
        initial_count: usize,
        growth_factor: f64,
    ) -> Result<Self, VectorError> {
        Self::with_config(
            VectorConfig::new(element_size)
                .initial_count(initial_count)
                .growth_factor(growth_factor),
        )
    }

    /// Create an empty container for values of type `T`.
    pub fn for_element<T: Element>(growth_factor: f64) -> Result<Self, VectorError> {
        Self::new(T::SIZE, 0, growth_factor)
    }

    /// Create a container from a validated configuration.
    pub fn with_config(config: VectorConfig) -> Result<Self, VectorError> {
        config.validate()?;
        let block = Block::allocate(config.initial_count, config.element_size)?;
        let id = ContainerId::next();
        debug!(
            container = id.get(),
            element_size = config.element_size,
            initial_count = config.initial_count,
            growth_factor = config.growth_factor,
            "created container"
        );
        Ok(Self {
            block,
            len: config.initial_count,
            growth_factor: config.growth_factor,
            id,
            generation: Generation::INITIAL,
        })
    }

    /// Release the container and its block.
    ///
    /// Equivalent to dropping it; provided for call sites that want the
    /// release to be explicit.
    pub fn destroy(self) {
        debug!(
            container = self.id.get(),
            bytes = self.block.memory_bytes(),
            "destroying container"
        );
    }

    // ── Introspection ───────────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of element slots in the block.
    ///
    /// Always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.block.slots()
    }

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.block.element_size()
    }

    /// Capacity multiplier applied when an append finds the block full.
    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    /// Identity of this container.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Current invalidation generation.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the container currently owns an allocation.
    pub fn is_allocated(&self) -> bool {
        self.block.is_allocated()
    }

    /// Bytes of the live elements, `len() * element_size()` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.block.slots_range(0, self.len)
    }

    /// Iterate over live elements as byte slices.
    pub fn iter_bytes(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.element_size())
    }

    /// Memory held by the block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.block.memory_bytes()
    }

    // ── Capacity control ────────────────────────────────────────────

    /// Ensure room for exactly `count` elements.
    ///
    /// Reallocates to exactly `count` slots if that exceeds the current
    /// capacity; otherwise does nothing. Never shrinks, never changes
    /// `len()`.
    pub fn reserve(&mut self, count: usize) -> Result<(), VectorError> {
        if count > self.capacity() {
            self.reallocate(count)?;
        }
        Ok(())
    }

    /// Set the number of live elements to `count`.
    ///
    /// Growing exposes slots with unspecified content and reallocates to
    /// exactly `count` slots if needed. Shrinking discards the tail
    /// logically; capacity is kept.
    pub fn resize(&mut self, count: usize) -> Result<(), VectorError> {
        if count > self.len {
            self.reserve(count)?;
        }
        self.len = count;
        Ok(())
    }

    /// Reallocate to exactly `len()` slots if the block is larger.
    pub fn shrink_to_fit(&mut self) -> Result<(), VectorError> {
        if self.capacity() > self.len {
            self.reallocate(self.len)?;
        }
        Ok(())
    }

    // ── Element mutation ────────────────────────────────────────────

    /// Append one element at the end.
    ///
    /// Grows the block by the growth factor first if it is full.
    pub fn push_back(&mut self, element: &[u8]) -> Result<(), VectorError> {
        self.check_payload(element)?;
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.block.slot_mut(self.len).copy_from_slice(element);
        self.len += 1;
        Ok(())
    }

    /// Remove the last element and return its bytes.
    ///
    /// The returned slice borrows the container, so it stays valid until
    /// the next mutation. Capacity is never reduced. Returns `None` if
    /// the container is empty.
    pub fn pop_back(&mut self) -> Option<&[u8]> {
        self.len = self.len.checked_sub(1)?;
        Some(self.block.slot(self.len))
    }

    /// Insert one element before the element at `position`.
    ///
    /// `position` may be anything from `begin()` to `end()` inclusive.
    /// Returns the position of the inserted element, valid at the new
    /// generation.
    pub fn insert(&mut self, position: Position, element: &[u8]) -> Result<Position, VectorError> {
        self.check_payload(element)?;
        let index = self.check(position)?;
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        if self.len == self.capacity() {
            self.grow()?;
        }
        self.block.move_slots(index, self.len, index + 1);
        self.block.slot_mut(index).copy_from_slice(element);
        self.len += 1;
        self.invalidate();
        Ok(self.position(index))
    }

    /// Remove the element at `position`, shifting later elements down.
    ///
    /// Returns the position now occupied by the element that followed the
    /// erased one (or `end()`), valid at the new generation.
    pub fn erase(&mut self, position: Position) -> Result<Position, VectorError> {
        let index = self.check(position)?;
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        self.block.move_slots(index + 1, self.len, index);
        self.len -= 1;
        self.invalidate();
        Ok(self.position(index))
    }

    /// Overwrite the element at `position` in place.
    ///
    /// Does not move elements and does not invalidate positions.
    pub fn set(&mut self, position: Position, element: &[u8]) -> Result<(), VectorError> {
        self.check_payload(element)?;
        self.value_mut(position)?.copy_from_slice(element);
        Ok(())
    }

    /// Replace the whole content with a copy of `[first, last)` of `source`.
    ///
    /// `source` must have the same element size. Capacity grows to
    /// exactly the new length when required and is never reduced.
    pub fn assign(
        &mut self,
        source: &ErasedVec,
        first: Position,
        last: Position,
    ) -> Result<(), VectorError> {
        if source.element_size() != self.element_size() {
            return Err(VectorError::ElementSizeMismatch {
                expected: self.element_size(),
                actual: source.element_size(),
            });
        }
        let (start, end) = source.range(first, last)?;
        let count = end - start;
        if count > self.capacity() {
            // Old content is discarded, so allocate fresh instead of
            // reallocating with a copy.
            let block = Block::allocate(count, self.element_size())?;
            trace!(
                container = self.id.get(),
                from = self.capacity(),
                to = count,
                "replacing block for assign"
            );
            self.block = block;
        }
        self.block
            .slots_range_mut(0, count)
            .copy_from_slice(source.block.slots_range(start, end));
        self.len = count;
        self.invalidate();
        Ok(())
    }

    /// Replace the whole content with `[first, last)` of this container's
    /// own current content.
    pub fn assign_within(&mut self, first: Position, last: Position) -> Result<(), VectorError> {
        let (start, end) = self.range(first, last)?;
        self.block.move_slots(start, end, 0);
        self.len = end - start;
        self.invalidate();
        Ok(())
    }

    /// Drop every element, keeping the block and its capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        self.invalidate();
    }

    /// Exchange the entire content of two containers in O(1).
    ///
    /// Blocks, lengths, element sizes and growth factors move; each
    /// container keeps its own identity. Positions of both containers are
    /// invalidated, since their indices no longer describe the content
    /// they were issued for.
    pub fn swap(&mut self, other: &mut ErasedVec) {
        mem::swap(&mut self.block, &mut other.block);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.growth_factor, &mut other.growth_factor);
        self.invalidate();
        other.invalidate();
        debug!(a = self.id.get(), b = other.id.get(), "swapped containers");
    }

    // ── Positions ───────────────────────────────────────────────────

    /// Position of the first element, equal to `end()` when empty.
    pub fn begin(&self) -> Position {
        self.position(0)
    }

    /// Past-the-end position. Never dereferenceable.
    pub fn end(&self) -> Position {
        self.position(self.len)
    }

    /// Position of the element at `index`, or `None` if `index >= len()`.
    pub fn at(&self, index: usize) -> Option<Position> {
        (index < self.len).then(|| self.position(index))
    }

    /// Bytes of the element at `position`.
    pub fn value(&self, position: Position) -> Result<&[u8], VectorError> {
        let index = self.check_element(position)?;
        Ok(self.block.slot(index))
    }

    /// Mutable bytes of the element at `position`.
    pub fn value_mut(&mut self, position: Position) -> Result<&mut [u8], VectorError> {
        let index = self.check_element(position)?;
        Ok(self.block.slot_mut(index))
    }

    /// Order two positions of this container.
    ///
    /// `Less` if `a` precedes `b`, `Equal` if they address the same slot,
    /// `Greater` otherwise.
    pub fn compare(&self, a: Position, b: Position) -> Result<Ordering, VectorError> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok(a.cmp(&b))
    }

    /// Advance `position` by exactly `count` slots.
    ///
    /// Moving past `end()` fails and leaves `position` unchanged.
    pub fn increment(&self, position: &mut Position, count: usize) -> Result<(), VectorError> {
        let index = self.check(*position)?;
        position.index = index
            .checked_add(count)
            .filter(|&target| target <= self.len)
            .ok_or_else(|| self.out_of_bounds(index.saturating_add(count)))?;
        Ok(())
    }

    /// Move `position` back by exactly `count` slots.
    ///
    /// Moving before `begin()` fails and leaves `position` unchanged.
    pub fn decrement(&self, position: &mut Position, count: usize) -> Result<(), VectorError> {
        let index = self.check(*position)?;
        position.index = index
            .checked_sub(count)
            .ok_or_else(|| self.out_of_bounds(index))?;
        Ok(())
    }

    /// Number of elements in `[first, last)`.
    pub fn distance(&self, first: Position, last: Position) -> Result<usize, VectorError> {
        let (start, end) = self.range(first, last)?;
        Ok(end - start)
    }

    // ── Typed helpers ───────────────────────────────────────────────

    /// Append `value`, encoded as native-endian bytes.
    pub fn push_value<T: Element>(&mut self, value: T) -> Result<(), VectorError> {
        self.check_width::<T>()?;
        let mut buf = vec![0u8; T::SIZE];
        value.write_bytes(&mut buf);
        self.push_back(&buf)
    }

    /// Remove the last element and decode it as `T`.
    ///
    /// Returns `Ok(None)` if the container is empty.
    pub fn pop_value<T: Element>(&mut self) -> Result<Option<T>, VectorError> {
        self.check_width::<T>()?;
        Ok(self.pop_back().and_then(T::read_bytes))
    }

    /// Insert `value` before `position`.
    pub fn insert_value<T: Element>(
        &mut self,
        position: Position,
        value: T,
    ) -> Result<Position, VectorError> {
        self.check_width::<T>()?;
        let mut buf = vec![0u8; T::SIZE];
        value.write_bytes(&mut buf);
        self.insert(position, &buf)
    }

    /// Decode the element at `position` as `T`.
    pub fn value_as<T: Element>(&self, position: Position) -> Result<T, VectorError> {
        self.check_width::<T>()?;
        let bytes = self.value(position)?;
        T::read_bytes(bytes).ok_or(VectorError::ElementSizeMismatch {
            expected: self.element_size(),
            actual: T::SIZE,
        })
    }

    /// Overwrite the element at `position` with `value`.
    pub fn set_value<T: Element>(&mut self, position: Position, value: T) -> Result<(), VectorError> {
        self.check_width::<T>()?;
        value.write_bytes(self.value_mut(position)?);
        Ok(())
    }

    /// Decode every live element as `T`.
    pub fn to_values<T: Element>(&self) -> Result<Vec<T>, VectorError> {
        self.check_width::<T>()?;
        Ok(self.iter_bytes().filter_map(T::read_bytes).collect())
    }

    // ── Internals ───────────────────────────────────────────────────

    fn position(&self, index: usize) -> Position {
        Position::new(self.id, self.generation, index)
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.next();
    }

    fn out_of_bounds(&self, index: usize) -> VectorError {
        VectorError::OutOfBounds {
            index,
            len: self.len,
        }
    }

    /// Validate ownership and generation, returning the slot index.
    fn check(&self, position: Position) -> Result<usize, VectorError> {
        if position.container != self.id {
            return Err(VectorError::ForeignHandle {
                handle: position.container,
                container: self.id,
            });
        }
        if position.generation != self.generation {
            return Err(VectorError::StaleHandle {
                handle_generation: position.generation,
                current: self.generation,
            });
        }
        Ok(position.index)
    }

    /// Like [`Self::check`], additionally requiring a live element.
    fn check_element(&self, position: Position) -> Result<usize, VectorError> {
        let index = self.check(position)?;
        if index >= self.len {
            return Err(self.out_of_bounds(index));
        }
        Ok(index)
    }

    /// Validate a `[first, last)` range of this container.
    fn range(&self, first: Position, last: Position) -> Result<(usize, usize), VectorError> {
        let start = self.check(first)?;
        let end = self.check(last)?;
        if start > end {
            return Err(VectorError::InvalidRange {
                first: start,
                last: end,
            });
        }
        if end > self.len {
            return Err(self.out_of_bounds(end));
        }
        Ok((start, end))
    }

    fn check_payload(&self, element: &[u8]) -> Result<(), VectorError> {
        if element.len() != self.element_size() {
            return Err(VectorError::ElementSizeMismatch {
                expected: self.element_size(),
                actual: element.len(),
            });
        }
        Ok(())
    }

    fn check_width<T: Element>(&self) -> Result<(), VectorError> {
        if T::SIZE != self.element_size() {
            return Err(VectorError::ElementSizeMismatch {
                expected: self.element_size(),
                actual: T::SIZE,
            });
        }
        Ok(())
    }

    /// Capacity after one growth step: `ceil(capacity * growth_factor)`,
    /// at least one more slot than now.
    fn grown_capacity(&self) -> Result<usize, VectorError> {
        let capacity = self.capacity();
        let minimum = capacity
            .checked_add(1)
            .ok_or(VectorError::CapacityOverflow {
                requested: capacity,
                element_size: self.element_size(),
            })?;
        // Float-to-int `as` saturates, so huge products clamp to usize::MAX
        // and are rejected by the byte-size check in `Block::allocate`.
        let scaled = (capacity as f64 * self.growth_factor).ceil() as usize;
        Ok(scaled.max(minimum))
    }

    fn grow(&mut self) -> Result<(), VectorError> {
        let target = self.grown_capacity()?;
        self.reallocate(target)
    }

    /// Replace the block with one of exactly `slots` slots, keeping the
    /// live prefix. The old block stays in place if allocation fails.
    fn reallocate(&mut self, slots: usize) -> Result<(), VectorError> {
        let block = self.block.reallocate(slots, self.len.min(slots))?;
        trace!(
            container = self.id.get(),
            element_size = self.element_size(),
            from = self.capacity(),
            to = slots,
            "reallocated block"
        );
        self.block = block;
        self.invalidate();
        Ok(())
    }
}

impl Clone for ErasedVec {
    /// Copy the block into a new container with its own identity.
    ///
    /// Positions of the original are foreign to the clone.
    fn clone(&self) -> Self {
        Self {
            block: self.block.clone(),
            len: self.len,
            growth_factor: self.growth_factor,
            id: ContainerId::next(),
            generation: Generation::INITIAL,
        }
    }
}

impl fmt::Debug for ErasedVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedVec")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("element_size", &self.element_size())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("growth_factor", &self.growth_factor)
            .finish()
    }
}
