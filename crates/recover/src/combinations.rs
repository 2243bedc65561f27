// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lazy enumeration of fixed-size subsets.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::iter::FusedIterator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Running,
    Done,
}

/// Iterator over every `k`-sized subset of a slice.
///
/// Subsets keep the relative order of the slice and are produced in the order a depth-first
/// backtracking search would emit them: `[0, 1, 2]`, `[0, 1, 3]`, ..., `[n-3, n-2, n-1]`.
/// Each item is a freshly allocated `Vec`, so holding on to a yielded combination is never
/// affected by later iteration.
///
/// The number of items is `C(n, k)`, which grows exponentially in `k`.
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    k: usize,
    state: State,
}

impl<'a, T> Clone for Combinations<'a, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            indices: self.indices.clone(),
            k: self.k,
            state: self.state,
        }
    }
}

/// Enumerates all `k`-sized subsets of `items`.
///
/// `k = 0` yields a single empty combination and `k > items.len()` yields nothing.
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<'_, T> {
    Combinations {
        items,
        indices: Vec::with_capacity(k),
        k,
        state: State::Start,
    }
}

impl<'a, T> Combinations<'a, T> {
    fn current(&self) -> Vec<&'a T> {
        self.indices.iter().map(|&i| &self.items[i]).collect()
    }

    /// Moves `indices` to the next combination, returning `false` once exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        // Backtrack to the deepest position that can still move right
        let Some(pos) = (0..self.k).rev().find(|&i| self.indices[i] < n - self.k + i) else {
            return false;
        };

        self.indices[pos] += 1;
        for i in pos + 1..self.k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<'a, T> Iterator for Combinations<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Start => {
                if self.k > self.items.len() {
                    self.state = State::Done;
                    return None;
                }
                self.indices.extend(0..self.k);
                self.state = State::Running;
                Some(self.current())
            }
            State::Running => {
                if self.advance() {
                    Some(self.current())
                } else {
                    self.state = State::Done;
                    None
                }
            }
            State::Done => None,
        }
    }
}

impl<T> FusedIterator for Combinations<'_, T> {}

/// The binomial coefficient `C(n, k)`.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);

    // Each partial product is itself a binomial coefficient, so the division is exact
    (0..k).fold(BigUint::one(), |acc, i| acc * (n - i) / (i + 1))
}
