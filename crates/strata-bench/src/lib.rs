//! Benchmark profiles for the Strata type-erased vector.
//!
//! Provides pre-built containers so benches measure the operation under
//! test rather than setup:
//!
//! - [`filled_i64`]: `n` sequential `i64` values, doubling growth
//! - [`filled_record`]: `n` opaque records of a chosen width
//! - [`filled_list`]: `n` sequential `f64` values in a node list

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_list::NodeList;
use strata_vector::ErasedVec;

/// Element count used by the reference profiles.
pub const REFERENCE_LEN: usize = 10_000;

/// Build a container holding `0..n` as `i64`.
pub fn filled_i64(n: usize) -> ErasedVec {
    let mut v = ErasedVec::for_element::<i64>(2.0).unwrap();
    v.reserve(n).unwrap();
    for i in 0..n as i64 {
        v.push_value(i).unwrap();
    }
    v
}

/// Build a container of `n` records, each `width` bytes filled with the
/// low byte of its index.
pub fn filled_record(n: usize, width: usize) -> ErasedVec {
    let mut v = ErasedVec::new(width, 0, 1.5).unwrap();
    let mut record = vec![0u8; width];
    for i in 0..n {
        record.fill(i as u8);
        v.push_back(&record).unwrap();
    }
    v
}

/// Build a node list holding `0..n` as `f64`.
pub fn filled_list(n: usize) -> NodeList {
    (0..n).map(|i| i as f64).collect()
}
