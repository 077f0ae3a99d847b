// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic helpers shared by the unit tests.

use alloc::vec::Vec;

/// Xorshift generator; reproducible without pulling in an RNG crate.
#[derive(Clone, Debug)]
pub(crate) struct Rng(u64);

impl Rng {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    /// Uniform-ish value in `lo..hi`. `hi` must exceed `lo`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Test ranges are tiny; the modulus fits comfortably in i64."
    )]
    pub(crate) fn range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = hi.abs_diff(lo);
        lo + (self.next_u64() % span) as i64
    }

    /// Fisher-Yates shuffle.
    pub(crate) fn shuffle<T>(&mut self, v: &mut [T]) {
        for i in (1..v.len()).rev() {
            let j = (self.next_u64() % (i as u64 + 1)) as usize;
            v.swap(i, j);
        }
    }
}

/// Every ordering of `items` (Heap's algorithm, iterative).
pub(crate) fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut v = items.to_vec();
    let n = v.len();
    let mut out = Vec::new();
    out.push(v.clone());
    let mut c = alloc::vec![0_usize; n];
    let mut i = 0;
    while i < n {
        if c[i] < i {
            if i % 2 == 0 {
                v.swap(0, i);
            } else {
                v.swap(c[i], i);
            }
            out.push(v.clone());
            c[i] += 1;
            i = 0;
        } else {
            c[i] = 0;
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn permutations_are_distinct_and_complete() {
        let all = permutations(&[1, 2, 3, 4]);
        assert_eq!(all.len(), 24);
        let unique: BTreeSet<_> = all.into_iter().collect();
        assert_eq!(unique.len(), 24);
    }
}
