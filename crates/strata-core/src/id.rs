//! Strongly-typed identifiers for containers and their generations.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ContainerId`] allocation.
static CONTAINER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a storage container.
///
/// Allocated from a monotonic atomic counter via [`ContainerId::next`].
/// Two distinct containers always have different IDs, even if they hold
/// identical bytes. Positions carry the ID of the container that issued
/// them so that a position handed to the wrong container is rejected
/// instead of silently addressing foreign memory.
///
/// The ID belongs to the container *value*, not to its contents: `swap`
/// exchanges blocks between two containers but leaves each ID in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocate a fresh, unique container ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(CONTAINER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Invalidation counter of a container.
///
/// Bumped every time the container reallocates its block or shifts,
/// replaces, or exchanges its elements. A position is usable only while
/// its recorded generation equals the container's current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation a freshly created container starts at.
    pub const INITIAL: Self = Self(0);

    /// The generation following this one.
    ///
    /// Wraps at `u64::MAX`; a handle would need to survive 2^64
    /// invalidations to alias.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
