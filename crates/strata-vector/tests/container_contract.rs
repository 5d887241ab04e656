//! Integration test: the container and position contract end to end.
//!
//! Each test drives the public API the way an algorithm would: obtain
//! positions, pass them back into mutating calls, and inspect sizes,
//! capacities and decoded values afterwards.

use std::cmp::Ordering;

use strata_vector::{ErasedVec, VectorError};

const DOUBLING: f64 = 2.0;

fn filled(count: i32) -> ErasedVec {
    let mut v = ErasedVec::for_element::<i32>(DOUBLING).unwrap();
    for i in 0..count {
        v.push_value(i).unwrap();
    }
    v
}

// ── Creation, size and capacity ─────────────────────────────────────

#[test]
fn make_with_zero_one_and_ten_elements() {
    let v0 = ErasedVec::new(std::mem::size_of::<i32>(), 0, DOUBLING).unwrap();
    assert!(!v0.is_allocated());
    assert_eq!(v0.element_size(), 4);
    assert_eq!(v0.len(), 0);
    assert_eq!(v0.capacity(), 0);
    v0.destroy();

    let v1 = ErasedVec::new(std::mem::size_of::<i32>(), 1, DOUBLING).unwrap();
    assert!(v1.is_allocated());
    assert_eq!(v1.element_size(), 4);
    assert_eq!(v1.len(), 1);
    assert_eq!(v1.capacity(), 1);
    v1.destroy();

    let v10 = ErasedVec::new(std::mem::size_of::<i32>(), 10, DOUBLING).unwrap();
    assert!(v10.is_allocated());
    assert_eq!(v10.element_size(), 4);
    assert_eq!(v10.len(), 10);
    assert_eq!(v10.capacity(), 10);
    v10.destroy();
}

// ── Growth law ──────────────────────────────────────────────────────

#[test]
fn five_pushes_follow_doubling_law() {
    let mut v = ErasedVec::for_element::<i32>(DOUBLING).unwrap();
    let mut capacities = Vec::new();
    let mut sizes = Vec::new();
    for i in 0..5 {
        v.push_value(i).unwrap();
        capacities.push(v.capacity());
        sizes.push(v.len());
    }
    assert_eq!(capacities, vec![1, 2, 4, 4, 8]);
    assert_eq!(sizes, vec![1, 2, 3, 4, 5]);
}

// ── Push/pop inverse ────────────────────────────────────────────────

#[test]
fn pop_undoes_push() {
    let mut v = filled(3);
    let len = v.len();
    v.push_value(42i32).unwrap();
    let capacity = v.capacity();

    assert_eq!(v.pop_value::<i32>().unwrap(), Some(42));
    assert_eq!(v.len(), len);
    assert_eq!(v.capacity(), capacity);
}

#[test]
fn popped_bytes_borrow_until_next_mutation() {
    let mut v = ErasedVec::new(3, 0, DOUBLING).unwrap();
    v.push_back(&[1, 2, 3]).unwrap();
    v.push_back(&[4, 5, 6]).unwrap();
    let popped = v.pop_back().unwrap().to_vec();
    assert_eq!(popped, vec![4, 5, 6]);
    assert_eq!(v.as_bytes(), &[1, 2, 3]);
}

// ── Insert/erase shift correctness ──────────────────────────────────

#[test]
fn insert_at_begin_then_erase_from_begin() {
    let mut v = ErasedVec::for_element::<i32>(DOUBLING).unwrap();
    for x in [4, 3, 2, 1, 0] {
        v.insert_value(v.begin(), x).unwrap();
    }
    assert_eq!(v.to_values::<i32>().unwrap(), vec![0, 1, 2, 3, 4]);

    let mut erased = Vec::new();
    while v.begin() != v.end() {
        let first = v.begin();
        erased.push(v.value_as::<i32>(first).unwrap());
        v.erase(first).unwrap();
    }
    assert_eq!(erased, vec![0, 1, 2, 3, 4]);
    assert!(v.is_empty());
}

// ── assign is a full replace ────────────────────────────────────────

#[test]
fn assign_snapshots_source() {
    let mut v = filled(5);
    let mut v_copy = ErasedVec::for_element::<i32>(DOUBLING).unwrap();
    v_copy.push_value(99).unwrap();

    v_copy.assign(&v, v.begin(), v.end()).unwrap();
    assert_eq!(v_copy.len(), v.len());
    assert_eq!(v_copy.as_bytes(), v.as_bytes());

    v.set_value(v.begin(), -1).unwrap();
    v.push_value(5).unwrap();
    v.erase(v.at(1).unwrap()).unwrap();

    assert_eq!(v_copy.to_values::<i32>().unwrap(), vec![0, 1, 2, 3, 4]);
}

// ── clear preserves capacity ────────────────────────────────────────

#[test]
fn clear_keeps_block() {
    let mut v = filled(6);
    let capacity = v.capacity();
    v.clear();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), capacity);
    assert_eq!(v.compare(v.begin(), v.end()), Ok(Ordering::Equal));
}

// ── swap ────────────────────────────────────────────────────────────

#[test]
fn swap_exchanges_content() {
    let mut a = filled(3);
    let mut b = filled(7);
    let (a_len, a_cap) = (a.len(), a.capacity());
    let (b_len, b_cap) = (b.len(), b.capacity());

    a.swap(&mut b);

    assert_eq!((a.len(), a.capacity()), (b_len, b_cap));
    assert_eq!((b.len(), b.capacity()), (a_len, a_cap));
    assert_eq!(a.to_values::<i32>().unwrap(), (0..7).collect::<Vec<_>>());
    assert_eq!(b.to_values::<i32>().unwrap(), vec![0, 1, 2]);

    // Swapping back restores the original arrangement.
    a.swap(&mut b);
    assert_eq!(a.to_values::<i32>().unwrap(), vec![0, 1, 2]);
}

// ── Position ordering ───────────────────────────────────────────────

#[test]
fn positions_order_over_ten_elements() {
    let v = filled(10);
    let first = v.at(0).unwrap();
    let last = v.at(9).unwrap();
    assert_eq!(v.compare(first, last), Ok(Ordering::Less));
    assert!(first < last);
    assert_eq!(v.compare(v.begin(), v.end()), Ok(Ordering::Less));

    let mut walked = v.begin();
    v.increment(&mut walked, v.len()).unwrap();
    assert_eq!(v.compare(walked, v.end()), Ok(Ordering::Equal));
    assert_eq!(walked, v.end());
}

#[test]
fn positions_walk_every_element() {
    let v = filled(10);
    let mut pos = v.begin();
    let mut seen = Vec::new();
    while v.compare(pos, v.end()) == Ok(Ordering::Less) {
        seen.push(v.value_as::<i32>(pos).unwrap());
        v.increment(&mut pos, 1).unwrap();
    }
    assert_eq!(seen, (0..10).collect::<Vec<_>>());

    v.decrement(&mut pos, 10).unwrap();
    assert_eq!(pos, v.begin());
}

// ── Invalidation ────────────────────────────────────────────────────

#[test]
fn stale_positions_fail_fast() {
    let mut v = filled(4);
    let before = v.at(2).unwrap();

    v.insert_value(v.begin(), -1).unwrap();

    assert!(matches!(
        v.value(before),
        Err(VectorError::StaleHandle { .. })
    ));
    assert!(matches!(
        v.erase(before),
        Err(VectorError::StaleHandle { .. })
    ));
    // The failed erase left the content untouched.
    assert_eq!(v.to_values::<i32>().unwrap(), vec![-1, 0, 1, 2, 3]);
}

#[test]
fn reserve_that_reallocates_invalidates() {
    let mut v = filled(2);
    let first = v.begin();
    v.reserve(64).unwrap();
    assert!(matches!(
        v.value(first),
        Err(VectorError::StaleHandle { .. })
    ));
    assert_eq!(v.value_as::<i32>(v.begin()).unwrap(), 0);
}

#[test]
fn positions_are_not_interchangeable_between_containers() {
    let a = filled(3);
    let b = filled(3);
    assert!(a.begin().partial_cmp(&b.begin()).is_none());
    assert!(matches!(
        a.compare(a.begin(), b.end()),
        Err(VectorError::ForeignHandle { .. })
    ));
}

// ── Failed growth ───────────────────────────────────────────────────

#[test]
fn failed_reserve_and_resize_change_nothing() {
    let mut v = filled(1);
    let first = v.begin();

    assert!(matches!(
        v.reserve(usize::MAX),
        Err(VectorError::CapacityOverflow { .. })
    ));
    assert!(matches!(
        v.resize(usize::MAX / 4),
        Err(VectorError::AllocationFailed { .. })
    ));

    assert_eq!((v.len(), v.capacity()), (1, 1));
    assert_eq!(v.value_as::<i32>(first).unwrap(), 0);
}

// ── Untyped payloads ────────────────────────────────────────────────

#[test]
fn arbitrary_width_records_round_trip() {
    // A 12-byte record: (u32 id, f64 weight), packed by hand.
    fn record(id: u32, weight: f64) -> [u8; 12] {
        let mut out = [0u8; 12];
        out[..4].copy_from_slice(&id.to_le_bytes());
        out[4..].copy_from_slice(&weight.to_le_bytes());
        out
    }

    let mut v = ErasedVec::new(12, 0, 1.5).unwrap();
    v.push_back(&record(1, 0.5)).unwrap();
    v.push_back(&record(3, 1.5)).unwrap();
    v.insert(v.at(1).unwrap(), &record(2, 1.0)).unwrap();

    let ids: Vec<u32> = v
        .iter_bytes()
        .map(|r| u32::from_le_bytes([r[0], r[1], r[2], r[3]]))
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(v.value(v.at(2).unwrap()).unwrap(), &record(3, 1.5));
}
