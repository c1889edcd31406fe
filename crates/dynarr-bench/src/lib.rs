//! Benchmark workloads for the dynarr container.
//!
//! - [`SIZES`]: element counts shared by every benchmark group
//! - [`churn`]: a deterministic append / read / shift-left-remove mix

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynArray;

/// Element counts each benchmark group is run at.
pub const SIZES: [u64; 3] = [1_000, 10_000, 100_000];

/// Run `rounds` rounds of two appends, one checked read and one removal
/// against `array`, returning a checksum of everything read or removed.
///
/// Removal positions walk the array so both cheap (near-tail) and expensive
/// (near-head) shifts are exercised. The array grows by one element per round.
pub fn churn(array: &mut DynArray<u64>, rounds: u64) -> u64 {
    let mut checksum = 0u64;
    for r in 0..rounds {
        array.push(r);
        array.push(r.wrapping_mul(31));
        let len = array.len() as u64;
        if let Ok(v) = array.get((r * 7 % len) as usize) {
            checksum = checksum.wrapping_add(*v);
        }
        let len = array.len() as u64;
        if let Ok(v) = array.remove((r * 13 % len) as usize) {
            checksum = checksum.wrapping_add(v);
        }
    }
    checksum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_grows_by_one_per_round() {
        let mut a = DynArray::new();
        churn(&mut a, 100);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn churn_is_deterministic() {
        let mut a = DynArray::new();
        let mut b = DynArray::new();
        assert_eq!(churn(&mut a, 500), churn(&mut b, 500));
        assert_eq!(a, b);
    }
}
