//! Core types for the Strata type-erased vector.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the storage and list crates: identifiers,
//! configuration, error types, and the [`Element`] byte codec.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod element;
pub mod error;
pub mod id;

pub use config::VectorConfig;
pub use element::Element;
pub use error::VectorError;
pub use id::{ContainerId, Generation};
