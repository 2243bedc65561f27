// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::combinations::{binomial, combinations, Combinations};
use crate::errors::ShareSetError;
use num_bigint::{BigInt, BigUint};
use sss_polynomial::Point;
use std::collections::HashSet;

/// A validated, read-only collection of shares and the threshold needed to reconstruct.
///
/// Guarantees `1 <= threshold <= len()` and pairwise distinct x coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareSet {
    points: Vec<Point>,
    threshold: usize,
}

impl ShareSet {
    pub fn new(points: Vec<Point>, threshold: usize) -> Result<Self, ShareSetError> {
        if threshold == 0 {
            return Err(ShareSetError::ZeroThreshold);
        }

        if threshold > points.len() {
            return Err(ShareSetError::ThresholdExceedsShares {
                threshold,
                shares: points.len(),
            });
        }

        if let Some(x) = first_duplicate_x(&points) {
            return Err(ShareSetError::DuplicateIndex { x });
        }

        Ok(Self { points, threshold })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of shares.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Every threshold-sized combination of shares, in enumeration order.
    pub fn combinations(&self) -> Combinations<'_, Point> {
        combinations(&self.points, self.threshold)
    }

    /// `C(n, k)` for this share set.
    pub fn combination_count(&self) -> BigUint {
        binomial(self.points.len(), self.threshold)
    }
}

fn first_duplicate_x(points: &[Point]) -> Option<BigInt> {
    let mut seen: HashSet<&BigInt> = HashSet::with_capacity(points.len());
    points
        .iter()
        .find(|p| !seen.insert(p.x()))
        .map(|p| p.x().clone())
}
