// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Exact Interpolation Library
//!
//! Arbitrary precision arithmetic for recovering the constant term of a polynomial from
//! point samples, as used when reconstructing a Shamir shared secret over the integers.
//!
//! ## Features
//!
//! - Uses `num-bigint` for every value so no precision is ever lost.
//! - Reduced fractions: [`Fraction`] keeps the running Lagrange sum in lowest terms.
//! - Lagrange interpolation at zero: [`interpolate_at_zero`] fails instead of rounding when
//!   the points do not describe an integral constant term.
//! - Polynomials: [`Polynomial`] evaluates integer polynomials, handy for producing points.
//! - Serialization: Optional serde support for points.

pub mod errors;
pub mod fraction;
pub mod interpolation;
pub mod polynomial;

pub use errors::{FractionError, InterpolationError};
pub use fraction::{gcd, Fraction};
pub use interpolation::{interpolate_at_zero, lagrange_term_at_zero, Point};
pub use polynomial::Polynomial;
