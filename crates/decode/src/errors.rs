// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use sss_recover::ShareSetError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Digit '{digit}' is invalid for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("Base {0} is not between 2 and 36")]
    InvalidBase(u32),
    #[error("Share value is empty")]
    EmptyValue,
    #[error("Share file has no \"keys\" entry")]
    MissingKeys,
    #[error("Share {index} is malformed: {message}")]
    MalformedShare { index: String, message: String },
    #[error("Share {index}: {source}")]
    Share {
        index: String,
        #[source]
        source: Box<DecodeError>,
    },
    #[error("Share set error: {0}")]
    ShareSet(#[from] ShareSetError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
