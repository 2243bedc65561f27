// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Robust Secret Recovery
//!
//! Recovers the secret of a Shamir share set when some shares may be corrupted and it is
//! not known which ones.
//!
//! Every size-`k` combination of the `n` shares is interpolated at zero with exact
//! arithmetic. Combinations whose constant term is not an integer are treated as
//! contaminated and dropped, the remaining constant terms are tallied, and the most
//! frequent one is reported.
//!
//! The vote is a heuristic, not a cryptographic guarantee. Any combination made only of
//! honest shares yields the true secret, so the true secret wins as long as honest
//! combinations outnumber every single spurious integral result. Enumeration cost grows
//! with `C(n, k)` and no pruning is performed.

pub mod combinations;
pub mod errors;
pub mod observer;
pub mod reconstruct;
pub mod share_set;
pub mod tally;

pub use combinations::{binomial, combinations, Combinations};
pub use errors::{RecoverError, ShareSetError};
pub use observer::{NoopObserver, RecoveryObserver, TracingObserver};
pub use reconstruct::{recover_secret, Reconstructor, RecoveryOptions, RecoveryReport};
pub use share_set::ShareSet;
pub use sss_polynomial::Point;
pub use tally::VoteTally;
