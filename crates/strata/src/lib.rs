//! Strata: a type-erased contiguous vector with generation-checked positions.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strata sub-crates. For most users, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // Four-byte elements, empty, doubling on overflow.
//! let mut v = ErasedVec::new(4, 0, 2.0).unwrap();
//! v.push_back(&7i32.to_ne_bytes()).unwrap();
//! v.push_value(9i32).unwrap();
//! assert_eq!(v.len(), 2);
//! assert_eq!(v.capacity(), 2);
//!
//! // Positions address elements and are checked on every use.
//! let first = v.begin();
//! assert_eq!(v.value_as::<i32>(first).unwrap(), 7);
//!
//! v.insert_value(first, 5i32).unwrap();
//! assert!(matches!(v.value(first), Err(VectorError::StaleHandle { .. })));
//! assert_eq!(v.to_values::<i32>().unwrap(), vec![5, 7, 9]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Errors, configuration, identifiers, `Element` |
//! | [`vector`] | `strata-vector` | `ErasedVec`, `Position`, `Block` |
//! | [`list`] | `strata-list` | `NodeList` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration, identifiers and the element codec (`strata-core`).
pub use strata_core as types;

/// The type-erased container and its positions (`strata-vector`).
pub use strata_vector as vector;

/// The singly-linked node list (`strata-list`).
pub use strata_list as list;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{ContainerId, Element, Generation, VectorConfig, VectorError};

    // Container
    pub use strata_vector::{ErasedVec, Position};

    // List
    pub use strata_list::NodeList;
}
