// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Diagnostic hooks invoked while a share set is reconstructed.

use num_bigint::{BigInt, BigUint};
use tracing::{debug, info};

/// Receives progress information from a [`Reconstructor`](crate::Reconstructor).
///
/// All methods default to doing nothing. Formatting and destination are up to the
/// implementation; the reconstructor itself performs no output.
pub trait RecoveryObserver {
    /// Called once with `C(n, k)` before enumeration starts.
    fn on_combination_count(&self, _total: &BigUint) {}

    /// Called with the running number of attempted combinations after every
    /// `batch_size` combinations, and after the final partial batch in parallel mode.
    fn on_progress(&self, _attempted: u64) {}

    /// Called after enumeration with the number of combinations that interpolated to an
    /// integer out of those attempted.
    fn on_interpolated(&self, _valid: u64, _attempted: u64) {}

    /// Called for every distinct candidate in first-seen order.
    fn on_candidate(&self, _secret: &BigInt, _count: usize) {}

    /// Called with the winning candidate.
    fn on_secret(&self, _secret: &BigInt, _count: usize) {}
}

pub struct NoopObserver;

impl RecoveryObserver for NoopObserver {}

/// Forwards every diagnostic to `tracing` at info level, tagged with a label such as the
/// share file name.
pub struct TracingObserver {
    label: String,
}

impl TracingObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl RecoveryObserver for TracingObserver {
    fn on_combination_count(&self, total: &BigUint) {
        info!(set = %self.label, combinations = %total, "Generated combinations");
    }

    fn on_progress(&self, attempted: u64) {
        debug!(set = %self.label, attempted, "Interpolating combinations");
    }

    fn on_interpolated(&self, valid: u64, attempted: u64) {
        info!(set = %self.label, valid, attempted, "Interpolated combinations");
    }

    fn on_candidate(&self, secret: &BigInt, count: usize) {
        info!(set = %self.label, %secret, count, "Secret candidate");
    }

    fn on_secret(&self, secret: &BigInt, count: usize) {
        info!(set = %self.label, %secret, count, "Secret recovered");
    }
}
