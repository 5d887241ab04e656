//! Positions: generation-scoped element addresses.
//!
//! A [`Position`] names a slot of a specific container. It records the
//! container's [`Generation`] at issue time, allowing O(1) staleness
//! checks on every use without a lookup table.

use std::cmp::Ordering;
use std::fmt;

use strata_core::{ContainerId, Generation};

/// Address of an element slot within an [`ErasedVec`](crate::ErasedVec).
///
/// Positions are plain `Copy` values: they neither own nor borrow the
/// container, so they can be held across calls that mutate it. The
/// container validates a position every time one is passed back in.
///
/// Positions of the same container and generation are totally ordered by
/// index. Positions of different containers or generations are
/// incomparable (`partial_cmp` returns `None`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Position {
    /// Container that issued this position.
    pub(crate) container: ContainerId,
    /// Container generation when this position was issued.
    pub(crate) generation: Generation,
    /// Element slot index. `len` denotes the past-the-end position.
    pub(crate) index: usize,
}

impl Position {
    pub(crate) fn new(container: ContainerId, generation: Generation, index: usize) -> Self {
        Self {
            container,
            generation,
            index,
        }
    }

    /// The container this position belongs to.
    pub fn container(&self) -> ContainerId {
        self.container
    }

    /// The generation this position was issued at.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Element index this position refers to.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.container != other.container || self.generation != other.generation {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(container={}, gen={}, index={})",
            self.container, self.generation, self.index
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_round_trip() {
        let id = ContainerId::next();
        let pos = Position::new(id, Generation(3), 17);
        assert_eq!(pos.container(), id);
        assert_eq!(pos.generation(), Generation(3));
        assert_eq!(pos.index(), 17);
    }

    #[test]
    fn same_container_orders_by_index() {
        let id = ContainerId::next();
        let a = Position::new(id, Generation(0), 1);
        let b = Position::new(id, Generation(0), 4);
        assert!(a < b);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn different_containers_are_incomparable() {
        let a = Position::new(ContainerId::next(), Generation(0), 0);
        let b = Position::new(ContainerId::next(), Generation(0), 0);
        assert_eq!(a.partial_cmp(&b), None);
        assert_ne!(a, b);
    }

    #[test]
    fn different_generations_are_incomparable() {
        let id = ContainerId::next();
        let a = Position::new(id, Generation(0), 2);
        let b = Position::new(id, Generation(1), 2);
        assert_eq!(a.partial_cmp(&b), None);
    }
}
