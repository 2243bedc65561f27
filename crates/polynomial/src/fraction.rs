// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Exact rational arithmetic on big integers.

use crate::errors::FractionError;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// Greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, n)` is `|n|` and `gcd(0, 0)` is `0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.abs().gcd(&b.abs())
}

/// A rational number kept in lowest terms.
///
/// The denominator is always strictly positive, so the numerator carries the sign and
/// zero is always represented as `0/1`. Two equal rationals therefore have equal fields,
/// which makes the derived `PartialEq` exact.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }
}

impl Fraction {
    /// Creates a fraction and brings it to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `FractionError::ZeroDenominator` if `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, FractionError> {
        if denominator.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::reduce(numerator, denominator))
    }

    /// The rational `0/1`.
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// Divides both parts by their gcd and moves the sign onto the numerator.
    ///
    /// The caller guarantees `denominator` is non-zero.
    fn reduce(numerator: BigInt, denominator: BigInt) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let divisor = gcd(&numerator, &denominator);
        let (mut numerator, mut denominator) = (numerator / &divisor, denominator / &divisor);

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Adds two fractions by cross multiplication and reduces the sum.
    pub fn add(&self, other: &Self) -> Self {
        let numerator =
            &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::reduce(numerator, denominator)
    }

    /// Multiplies two fractions and reduces the product.
    pub fn mul(&self, other: &Self) -> Self {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Self::reduce(numerator, denominator)
    }

    /// Multiplies the fraction by an integer.
    pub fn scale(&self, factor: &BigInt) -> Self {
        Self::reduce(&self.numerator * factor, self.denominator.clone())
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the fraction denotes an integer.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the integer value, or `None` for a proper fraction.
    pub fn to_integer(&self) -> Option<BigInt> {
        self.is_integer().then(|| self.numerator.clone())
    }

    /// Splits the fraction into its numerator and denominator.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(BigInt::from(n), BigInt::from(d)).unwrap()
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&BigInt::from(12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(-12), &BigInt::from(18)), BigInt::from(6));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(7)), BigInt::from(7));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(-7)), BigInt::from(7));
        assert_eq!(gcd(&BigInt::from(0), &BigInt::from(0)), BigInt::from(0));
    }

    #[test]
    fn test_new_reduces_to_lowest_terms() {
        let f = frac(6, 8);
        assert_eq!(f.numerator(), &BigInt::from(3));
        assert_eq!(f.denominator(), &BigInt::from(4));
    }

    #[test]
    fn test_sign_moves_to_numerator() {
        let f = frac(3, -6);
        assert_eq!(f.numerator(), &BigInt::from(-1));
        assert_eq!(f.denominator(), &BigInt::from(2));

        let f = frac(-3, -6);
        assert_eq!(f, frac(1, 2));
    }

    #[test]
    fn test_zero_numerator_normalises() {
        let f = frac(0, -17);
        assert_eq!(f, Fraction::zero());
        assert_eq!(f.denominator(), &BigInt::from(1));
        assert!(f.is_zero());
        assert!(f.is_integer());
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(
            Fraction::new(BigInt::from(1), BigInt::from(0)),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn test_addition() {
        assert_eq!(frac(1, 2).add(&frac(1, 3)), frac(5, 6));
        assert_eq!(frac(1, 2).add(&frac(-1, 2)), Fraction::zero());
        assert_eq!(frac(3, 4).add(&frac(1, 4)), frac(1, 1));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(frac(2, 3).mul(&frac(9, 4)), frac(3, 2));
        assert_eq!(frac(-2, 3).mul(&frac(3, -2)), frac(1, 1));
        assert_eq!(frac(5, 7).scale(&BigInt::from(14)), frac(10, 1));
    }

    #[test]
    fn test_to_integer() {
        assert_eq!(frac(10, 5).to_integer(), Some(BigInt::from(2)));
        assert_eq!(frac(-10, 5).to_integer(), Some(BigInt::from(-2)));
        assert_eq!(frac(10, 4).to_integer(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(-3, 6).to_string(), "-1/2");
        assert_eq!(frac(8, 2).to_string(), "4");
    }

    #[test]
    fn test_large_values_stay_exact() {
        let big = BigInt::from(u64::MAX) * BigInt::from(u64::MAX);
        let f = Fraction::new(&big * 3, &big * 6).unwrap();
        assert_eq!(f, frac(1, 2));
    }
}
