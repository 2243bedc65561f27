// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Turns share files into validated [`ShareSet`](sss_recover::ShareSet)s.
//!
//! A share file is a JSON object holding the share count and threshold under `keys` and one
//! entry per share, keyed by the share index, whose value is written in an arbitrary base
//! between 2 and 36.

pub mod digits;
pub mod errors;
pub mod share_file;

pub use digits::decode_digits;
pub use errors::DecodeError;
pub use share_file::{EncodedShare, ShareFile, ShareKeys};
