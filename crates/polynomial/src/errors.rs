// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for fraction and interpolation operations.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors that can occur while building fractions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// The denominator of a fraction was zero
    #[error("Fraction denominator cannot be zero")]
    ZeroDenominator,
}

/// Errors that can occur during Lagrange interpolation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// The interpolated constant term is a proper fraction.
    ///
    /// For share reconstruction this means the subset of points contains a corrupted share.
    #[error("Interpolated value {numerator}/{denominator} is not an integer")]
    NonIntegralResult {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// Two points share the same x coordinate, so the basis polynomials are undefined
    #[error("Duplicate x coordinate {x} in interpolation points")]
    DuplicateAbscissa { x: BigInt },

    /// Interpolation needs at least one point
    #[error("Cannot interpolate an empty set of points")]
    NoPoints,
}

