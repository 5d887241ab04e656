//! Error types for container and position operations.
//!
//! Every fallible operation on a storage container reports one of these
//! variants. Misuse by the caller, such as a stale position or a payload of
//! the wrong width, is reported here rather than left undefined.

use std::error::Error;
use std::fmt;

use crate::id::{ContainerId, Generation};

/// Errors that can occur during container and position operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// A configuration value was rejected at construction time.
    InvalidConfig {
        /// Description of the invalid value.
        reason: String,
    },
    /// The requested slot count cannot be expressed in bytes.
    CapacityOverflow {
        /// Requested number of element slots.
        requested: usize,
        /// Bytes per element.
        element_size: usize,
    },
    /// The allocator could not provide the requested block.
    ///
    /// The container is left exactly as it was before the call.
    AllocationFailed {
        /// Size of the block that could not be allocated.
        bytes: usize,
    },
    /// An element payload did not match the container's element size.
    ElementSizeMismatch {
        /// The container's element size.
        expected: usize,
        /// Length of the supplied payload.
        actual: usize,
    },
    /// An index or position lies outside the container's logical range.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Logical length of the container at the time of the call.
        len: usize,
    },
    /// A position was issued before an operation that invalidated it.
    StaleHandle {
        /// The generation recorded in the position.
        handle_generation: Generation,
        /// The container's current generation.
        current: Generation,
    },
    /// A position belongs to a different container.
    ForeignHandle {
        /// The container named by the position.
        handle: ContainerId,
        /// The container the position was passed to.
        container: ContainerId,
    },
    /// A `[first, last)` range whose `first` follows its `last`.
    InvalidRange {
        /// Index of the range start.
        first: usize,
        /// Index of the range end.
        last: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
            Self::CapacityOverflow {
                requested,
                element_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {requested} slots of {element_size} bytes exceed usize"
                )
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::StaleHandle {
                handle_generation,
                current,
            } => {
                write!(
                    f,
                    "stale position: generation {handle_generation}, container at {current}"
                )
            }
            Self::ForeignHandle { handle, container } => {
                write!(
                    f,
                    "position belongs to container {handle}, not container {container}"
                )
            }
            Self::InvalidRange { first, last } => {
                write!(f, "invalid range: first {first} is after last {last}")
            }
        }
    }
}

impl Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = VectorError::OutOfBounds { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of bounds for length 3");

        let err = VectorError::ElementSizeMismatch {
            expected: 4,
            actual: 8,
        };
        assert_eq!(
            err.to_string(),
            "element size mismatch: expected 4 bytes, got 8"
        );
    }

    #[test]
    fn stale_handle_reports_both_generations() {
        let err = VectorError::StaleHandle {
            handle_generation: Generation(2),
            current: Generation(5),
        };
        assert_eq!(
            err.to_string(),
            "stale position: generation 2, container at 5"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error>(_: &E) {}
        assert_error(&VectorError::AllocationFailed { bytes: 16 });
    }
}
