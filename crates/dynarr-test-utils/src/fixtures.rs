//! Prebuilt arrays for tests and benchmarks.

use dynarr::DynArray;

use crate::{DropTally, Tracked};

/// An array holding `0..n` in order, built by successive appends.
pub fn sequence(n: u64) -> DynArray<u64> {
    let mut array = DynArray::new();
    for i in 0..n {
        array.push(i);
    }
    array
}

/// An array of `n` [`Tracked`] elements with ids `0..n`.
pub fn tracked_sequence(tally: &DropTally, n: u32) -> DynArray<Tracked> {
    let mut array = DynArray::new();
    for id in 0..n {
        array.push(tally.track(id));
    }
    array
}

/// Ids of the tracked elements, in storage order.
pub fn ids(array: &DynArray<Tracked>) -> Vec<u32> {
    array.as_slice().iter().map(|t| t.id).collect()
}
