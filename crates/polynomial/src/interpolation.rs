// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange interpolation at `x = 0` over the rationals.

use crate::errors::InterpolationError;
use crate::fraction::Fraction;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sample `(x, y)` of a polynomial with big integer coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x.into(), y.into())
    }
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

/// Computes the contribution of `points[i]` to the interpolated value at zero.
///
/// ```text
/// term_i = y_i · Π_{j≠i} (0 − x_j) / Π_{j≠i} (x_i − x_j)
/// ```
///
/// # Errors
///
/// Returns `InterpolationError::DuplicateAbscissa` if another point has the same x as
/// `points[i]`.
///
/// # Panics
///
/// Panics if `i` is out of bounds.
pub fn lagrange_term_at_zero<P: Borrow<Point>>(
    points: &[P],
    i: usize,
) -> Result<Fraction, InterpolationError> {
    let point = points[i].borrow();
    let mut numerator = BigInt::one();
    let mut denominator = BigInt::one();

    for (j, other) in points.iter().enumerate() {
        if i == j {
            continue;
        }
        let other = other.borrow();
        let difference = &point.x - &other.x;
        if difference.is_zero() {
            return Err(InterpolationError::DuplicateAbscissa {
                x: point.x.clone(),
            });
        }
        numerator *= -&other.x;
        denominator *= difference;
    }

    Fraction::new(&point.y * numerator, denominator).map_err(|_| {
        InterpolationError::DuplicateAbscissa {
            x: point.x.clone(),
        }
    })
}

/// Recovers the constant term of the unique polynomial of degree `< points.len()` passing
/// through `points`.
///
/// Every intermediate value is exact: the Lagrange terms are summed as reduced fractions and
/// the result is only accepted when the final fraction is an integer. The sum does not depend
/// on the order of `points`.
///
/// # Errors
///
/// * `InterpolationError::NonIntegralResult` if the constant term is not an integer.
/// * `InterpolationError::DuplicateAbscissa` if two points share an x coordinate.
/// * `InterpolationError::NoPoints` if `points` is empty.
pub fn interpolate_at_zero<P: Borrow<Point>>(points: &[P]) -> Result<BigInt, InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }

    let mut total = Fraction::zero();
    for i in 0..points.len() {
        total = total.add(&lagrange_term_at_zero(points, i)?);
    }

    if total.is_integer() {
        let (numerator, _) = total.into_parts();
        Ok(numerator)
    } else {
        let (numerator, denominator) = total.into_parts();
        Err(InterpolationError::NonIntegralResult {
            numerator,
            denominator,
        })
    }
}
