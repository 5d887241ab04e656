//! Singly-linked node list with bounds-checked index operations.
//!
//! [`NodeList`] is the pointer-chasing companion to the contiguous
//! container in `strata-vector`. Every index-based operation degrades
//! gracefully: out-of-range reads return `None` and out-of-range writes
//! leave the list untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod list;

pub use list::{Iter, Node, NodeList};
