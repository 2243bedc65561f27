// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! JSON share files.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use crate::digits::decode_digits;
use crate::errors::DecodeError;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sss_polynomial::Point;
use sss_recover::ShareSet;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// The `keys` entry of a share file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareKeys {
    /// Declared number of shares.
    pub n: usize,
    /// Threshold.
    pub k: usize,
}

/// A base written either as a decimal string or as a JSON number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Base {
    Number(u32),
    Text(String),
}

/// One share as it appears in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedShare {
    base: Base,
    value: String,
}

impl EncodedShare {
    pub fn new(base: u32, value: impl Into<String>) -> Self {
        Self {
            base: Base::Number(base),
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn base(&self) -> Result<u32, DecodeError> {
        match &self.base {
            Base::Number(base) => Ok(*base),
            Base::Text(text) => text.trim().parse().map_err(|_| DecodeError::MalformedShare {
                index: String::new(),
                message: format!("base \"{text}\" is not a number"),
            }),
        }
    }

    /// Decodes the share value.
    pub fn decode(&self) -> Result<BigInt, DecodeError> {
        Ok(BigInt::from(decode_digits(&self.value, self.base()?)?))
    }
}

/// A parsed share file, holding encoded shares keyed by share index.
#[derive(Clone, Debug, Deserialize)]
pub struct ShareFile {
    keys: Option<ShareKeys>,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl FromStr for ShareFile {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl ShareFile {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        contents.parse()
    }

    pub fn keys(&self) -> Result<&ShareKeys, DecodeError> {
        self.keys.as_ref().ok_or(DecodeError::MissingKeys)
    }

    /// Decoded shares ordered by ascending index.
    ///
    /// Entries whose key is not an integer are ignored. The first share that fails to decode
    /// aborts the whole file.
    pub fn points(&self) -> Result<Vec<Point>, DecodeError> {
        let mut points = Vec::with_capacity(self.entries.len());

        for (key, raw) in &self.entries {
            let Ok(x) = key.trim().parse::<BigInt>() else {
                debug!(key = %key, "Ignoring non-share entry");
                continue;
            };

            let share: EncodedShare =
                serde_json::from_value(raw.clone()).map_err(|e| DecodeError::MalformedShare {
                    index: key.clone(),
                    message: e.to_string(),
                })?;

            let y = share.decode().map_err(|source| match source {
                DecodeError::MalformedShare { message, .. } => DecodeError::MalformedShare {
                    index: key.clone(),
                    message,
                },
                source => DecodeError::Share {
                    index: key.clone(),
                    source: Box::new(source),
                },
            })?;

            points.push(Point::new(x, y));
        }

        // Keys are stored as strings, so "10" would otherwise sort before "2"
        points.sort_by(|a, b| a.x().cmp(b.x()));
        Ok(points)
    }

    /// Decodes every share and validates the result against the threshold.
    pub fn into_share_set(self) -> Result<ShareSet, DecodeError> {
        let keys = self.keys()?;
        let points = self.points()?;

        if points.len() != keys.n {
            warn!(
                declared = keys.n,
                decoded = points.len(),
                "Share count differs from keys.n, using the decoded shares"
            );
        }

        Ok(ShareSet::new(points, keys.k)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn test_parse_sample() {
        let file: ShareFile = SAMPLE.parse().unwrap();
        assert_eq!(file.keys().unwrap(), &ShareKeys { n: 4, k: 3 });
        assert_eq!(
            file.points().unwrap(),
            vec![
                Point::from((1, 4)),
                Point::from((2, 7)),
                Point::from((3, 12)),
                Point::from((6, 39)),
            ]
        );
    }

    #[test]
    fn test_points_sorted_numerically() {
        let file: ShareFile = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "1" },
            "2": { "base": "10", "value": "2" },
            "1": { "base": "10", "value": "3" }
        }"#
        .parse()
        .unwrap();
        let xs: Vec<BigInt> = file
            .points()
            .unwrap()
            .iter()
            .map(|p| p.x().clone())
            .collect();
        assert_eq!(xs, vec![BigInt::from(1), BigInt::from(2), BigInt::from(10)]);
    }

    #[test]
    fn test_numeric_base_and_extra_entries() {
        let file: ShareFile = r#"{
            "keys": { "n": 1, "k": 1 },
            "comment": "ignored",
            "1": { "base": 16, "value": "FF" }
        }"#
        .parse()
        .unwrap();
        assert_eq!(file.points().unwrap(), vec![Point::from((1, 255))]);
    }

    #[test]
    fn test_invalid_digit_aborts_file() {
        let file: ShareFile = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "121" }
        }"#
        .parse()
        .unwrap();
        match file.points() {
            Err(DecodeError::Share { index, source }) => {
                assert_eq!(index, "2");
                assert!(matches!(
                    *source,
                    DecodeError::InvalidDigit { digit: '2', base: 2 }
                ));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_malformed_share() {
        let file: ShareFile = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "value": "4" }
        }"#
        .parse()
        .unwrap();
        assert!(matches!(
            file.points(),
            Err(DecodeError::MalformedShare { index, .. }) if index == "1"
        ));

        let file: ShareFile = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "ten", "value": "4" }
        }"#
        .parse()
        .unwrap();
        assert!(matches!(
            file.points(),
            Err(DecodeError::MalformedShare { index, .. }) if index == "1"
        ));
    }

    #[test]
    fn test_missing_keys() {
        let file: ShareFile = r#"{ "1": { "base": "10", "value": "4" } }"#.parse().unwrap();
        assert!(matches!(file.into_share_set(), Err(DecodeError::MissingKeys)));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            "{ not json".parse::<ShareFile>(),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_threshold_checked() {
        let file: ShareFile = r#"{
            "keys": { "n": 1, "k": 2 },
            "1": { "base": "10", "value": "4" }
        }"#
        .parse()
        .unwrap();
        assert!(matches!(
            file.into_share_set(),
            Err(DecodeError::ShareSet(_))
        ));
    }

    #[test]
    fn test_encoded_share() {
        let share = EncodedShare::new(36, "z");
        assert_eq!(share.value(), "z");
        assert_eq!(share.decode().unwrap(), BigInt::from(35));
    }
}
