// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::DecodeError;
use num_bigint::BigUint;
use num_traits::Zero;

pub const MAX_BASE: u32 = 36;

/// Decodes a most-significant-first digit string in `base`.
///
/// Digits are `0`-`9` followed by `a`-`z` (case-insensitive) for the values 10 to 35.
///
/// # Errors
///
/// * `DecodeError::InvalidBase` unless `2 <= base <= 36`.
/// * `DecodeError::EmptyValue` if `value` has no digits.
/// * `DecodeError::InvalidDigit` for a character outside the alphabet or a digit whose
///   value is not below `base`.
pub fn decode_digits(value: &str, base: u32) -> Result<BigUint, DecodeError> {
    if !(2..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }
    if value.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    value.chars().try_fold(BigUint::zero(), |acc, digit| {
        match digit.to_digit(MAX_BASE) {
            Some(d) if d < base => Ok(acc * base + d),
            _ => Err(DecodeError::InvalidDigit { digit, base }),
        }
    })
}
