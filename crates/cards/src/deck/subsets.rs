// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets generation.

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u32; 8]; 52] {
    let mut t = [[0u32; 8]; 52];
    let mut n = 0;

    while n < 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 52] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    if n < k {
        0
    } else if n == 0 {
        // Only the empty subset.
        1
    } else {
        NCKS[n.saturating_sub(1)][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
pub(super) fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets starting from the nth ksubset.
pub(super) fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if count == 0 {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = [0usize; 7 + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

/// A lazy iterator over all the K-subsets of `0..n`.
///
/// Each subset is a strictly ascending array of indices and subsets come in
/// lexicographic order, for example the 3-subsets of `0..5` are:
///
/// ```
/// # use pokerhands_cards::KSubsets;
/// let subsets = KSubsets::<3>::new(5).collect::<Vec<_>>();
/// assert_eq!(subsets.len(), 10);
/// assert_eq!(subsets[0], [0, 1, 2]);
/// assert_eq!(subsets[1], [0, 1, 3]);
/// assert_eq!(subsets[9], [2, 3, 4]);
/// ```
///
/// The iterator can be restarted with [KSubsets::restart] or cloned to walk
/// the same sequence twice.
#[derive(Debug, Clone)]
pub struct KSubsets<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
}

impl<const K: usize> KSubsets<K> {
    /// Creates an iterator over the K-subsets of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            next: Self::first(n),
        }
    }

    /// Restarts the iteration from the first subset.
    pub fn restart(&mut self) {
        self.next = Self::first(self.n);
    }

    fn first(n: usize) -> Option<[usize; K]> {
        (K <= n).then(|| std::array::from_fn(|i| i))
    }

    /// The subset that follows `c` in lexicographic order.
    fn successor(&self, mut c: [usize; K]) -> Option<[usize; K]> {
        // Rightmost position that can still move right.
        let i = (0..K).rev().find(|&i| c[i] < self.n - K + i)?;
        c[i] += 1;
        for j in i + 1..K {
            c[j] = c[j - 1] + 1;
        }

        Some(c)
    }
}

impl<const K: usize> Iterator for KSubsets<K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.successor(current);
        Some(current)
    }
}
