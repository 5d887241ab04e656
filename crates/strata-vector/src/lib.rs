//! Type-erased contiguous storage with generation-checked positions.
//!
//! An [`ErasedVec`] stores zero to N elements of a fixed byte width in a
//! single owned block. The element type is not known at compile time:
//! callers pass opaque payloads of exactly `element_size` bytes, or use
//! the typed helpers over [`Element`](strata_core::Element).
//!
//! # Architecture
//!
//! ```text
//! ErasedVec (owner)
//! ├── Block (Box<[u8]>, exactly capacity * element_size bytes)
//! ├── len / growth_factor
//! └── ContainerId + Generation (position validation)
//!
//! Position (Copy value, owns nothing)
//! └── ContainerId + Generation + index
//! ```
//!
//! # Position invalidation
//!
//! Every operation that reallocates the block or moves elements bumps the
//! container's [`Generation`](strata_core::Generation). A position issued
//! earlier is rejected with [`VectorError::StaleHandle`] on its next use
//! instead of reading moved or freed bytes. Positions handed to the wrong
//! container are rejected with [`VectorError::ForeignHandle`].
//!
//! # Safety
//!
//! No `unsafe`. Blocks are plain byte buffers obtained through
//! `Vec::try_reserve_exact`, so allocation failure surfaces as
//! [`VectorError::AllocationFailed`] rather than an abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod position;
pub mod vector;

// Public re-exports for the primary API surface.
pub use block::Block;
pub use position::Position;
pub use strata_core::{VectorConfig, VectorError};
pub use vector::ErasedVec;
