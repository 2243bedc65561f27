// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Integer polynomials for producing share points.

use crate::interpolation::Point;
use num_bigint::BigInt;

/// An integer polynomial `a_0 + a_1 x + ... + a_d x^d`.
///
/// In secret sharing terms `a_0` is the secret and a share is the value at a non-zero x.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    /// `a_0` first.
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    pub fn from_ascending_coefficients(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    /// `a_0`, or zero for an empty polynomial.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Horner evaluation from the leading coefficient down.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::default(), |acc, coeff| acc * x + coeff)
    }

    /// One point per abscissa, in input order.
    pub fn sample<I>(&self, xs: I) -> Vec<Point>
    where
        I: IntoIterator<Item = BigInt>,
    {
        xs.into_iter()
            .map(|x| {
                let y = self.evaluate(&x);
                Point::new(x, y)
            })
            .collect()
    }
}
