// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use thiserror::Error;

/// Reasons a collection of points cannot form a share set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareSetError {
    #[error("Threshold must be at least 1")]
    ZeroThreshold,

    #[error("Threshold {threshold} exceeds the number of shares {shares}")]
    ThresholdExceedsShares { threshold: usize, shares: usize },

    #[error("Share index {x} appears more than once")]
    DuplicateIndex { x: BigInt },
}

/// Errors surfaced by reconstruction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecoverError {
    /// No combination of shares produced an integral constant term
    #[error("No combination of shares yields an integral secret")]
    NotFound,

    #[error("Invalid share set: {0}")]
    InvalidShareSet(#[from] ShareSetError),

    /// The cancellation flag was raised between combinations
    #[error("Reconstruction was cancelled")]
    Cancelled,
}
