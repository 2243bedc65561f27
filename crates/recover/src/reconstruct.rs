// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Majority-vote reconstruction over every threshold-sized combination of shares.

use crate::errors::{RecoverError, ShareSetError};
use crate::observer::{NoopObserver, RecoveryObserver};
use crate::share_set::ShareSet;
use crate::tally::VoteTally;
use num_bigint::BigInt;
use rayon::prelude::*;
use sss_polynomial::{interpolate_at_zero, InterpolationError, Point};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Tuning knobs for a [`Reconstructor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoveryOptions {
    /// Interpolate combinations on the rayon thread pool.
    pub parallel: bool,
    /// Number of combinations handed to the pool at a time when `parallel` is set. Also the
    /// interval between progress reports.
    pub batch_size: usize,
}

impl Default for RecoveryOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Outcome of tallying every combination of a share set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    tally: VoteTally,
    valid: u64,
    attempted: u64,
}

impl RecoveryReport {
    pub fn tally(&self) -> &VoteTally {
        &self.tally
    }

    /// Combinations whose constant term was an integer.
    pub fn valid_combinations(&self) -> u64 {
        self.valid
    }

    pub fn attempted_combinations(&self) -> u64 {
        self.attempted
    }

    /// The most frequent candidate and its count.
    pub fn secret(&self) -> Option<(&BigInt, usize)> {
        self.tally.winner()
    }

    pub fn into_secret(self) -> Result<BigInt, RecoverError> {
        self.tally
            .winner()
            .map(|(secret, _)| secret.clone())
            .ok_or(RecoverError::NotFound)
    }

    fn record(&mut self, result: Result<BigInt, InterpolationError>) -> Result<(), RecoverError> {
        self.attempted += 1;
        match result {
            Ok(secret) => {
                self.valid += 1;
                self.tally.record(secret);
                Ok(())
            }
            Err(InterpolationError::NonIntegralResult {
                numerator,
                denominator,
            }) => {
                trace!(%numerator, %denominator, "Skipping contaminated combination");
                Ok(())
            }
            // Unreachable for a validated ShareSet
            Err(InterpolationError::DuplicateAbscissa { x }) => {
                Err(ShareSetError::DuplicateIndex { x }.into())
            }
            Err(InterpolationError::NoPoints) => Err(ShareSetError::ZeroThreshold.into()),
        }
    }
}

/// Recovers secrets by interpolating every combination and voting on the constant terms.
///
/// The result does not depend on `parallel`: batches are interpolated concurrently but
/// tallied in enumeration order, so the first-seen tie-break is the same either way.
pub struct Reconstructor {
    options: RecoveryOptions,
    observer: Box<dyn RecoveryObserver + Send + Sync>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new(RecoveryOptions::default())
    }
}

impl Reconstructor {
    pub fn new(options: RecoveryOptions) -> Self {
        Self {
            options,
            observer: Box::new(NoopObserver),
            cancelled: None,
        }
    }

    pub fn with_observer(mut self, observer: impl RecoveryObserver + Send + Sync + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Aborts reconstruction with `RecoverError::Cancelled` once `flag` is set.
    ///
    /// The flag is checked before every combination, or before every batch in parallel mode.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(flag);
        self
    }

    pub fn options(&self) -> &RecoveryOptions {
        &self.options
    }

    /// Returns the most frequent integral constant term over all combinations.
    ///
    /// # Errors
    ///
    /// * `RecoverError::NotFound` if no combination interpolates to an integer.
    /// * `RecoverError::Cancelled` if the cancellation flag was raised.
    pub fn recover(&self, share_set: &ShareSet) -> Result<BigInt, RecoverError> {
        let report = self.tally(share_set)?;
        if let Some((secret, count)) = report.secret() {
            self.observer.on_secret(secret, count);
        }
        report.into_secret()
    }

    /// Interpolates every combination and returns the full vote.
    pub fn tally(&self, share_set: &ShareSet) -> Result<RecoveryReport, RecoverError> {
        let total = share_set.combination_count();
        self.observer.on_combination_count(&total);
        debug!(
            shares = share_set.len(),
            threshold = share_set.threshold(),
            combinations = %total,
            parallel = self.options.parallel,
            "Reconstructing share set"
        );

        let report = if self.options.parallel {
            self.tally_parallel(share_set)?
        } else {
            self.tally_sequential(share_set)?
        };

        self.observer
            .on_interpolated(report.valid, report.attempted);
        for (secret, count) in report.tally.iter() {
            self.observer.on_candidate(secret, count);
        }

        info!(
            valid = report.valid,
            attempted = report.attempted,
            candidates = report.tally.len(),
            "Tallied share set"
        );
        Ok(report)
    }

    fn tally_sequential(&self, share_set: &ShareSet) -> Result<RecoveryReport, RecoverError> {
        let interval = self.options.batch_size.max(1) as u64;
        let mut report = RecoveryReport::default();
        for combination in share_set.combinations() {
            self.checkpoint()?;
            report.record(interpolate_at_zero(&combination))?;
            if report.attempted % interval == 0 {
                self.observer.on_progress(report.attempted);
            }
        }
        Ok(report)
    }

    fn tally_parallel(&self, share_set: &ShareSet) -> Result<RecoveryReport, RecoverError> {
        let batch_size = self.options.batch_size.max(1);
        let mut report = RecoveryReport::default();
        let mut combinations = share_set.combinations();

        loop {
            self.checkpoint()?;
            let batch: Vec<Vec<&Point>> = combinations.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }

            let results: Vec<Result<BigInt, InterpolationError>> = batch
                .par_iter()
                .map(|combination| interpolate_at_zero(combination))
                .collect();

            for result in results {
                report.record(result)?;
            }
            self.observer.on_progress(report.attempted);
        }

        Ok(report)
    }

    fn checkpoint(&self) -> Result<(), RecoverError> {
        match &self.cancelled {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(RecoverError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Recovers the secret of `share_set` sequentially with no diagnostics.
///
/// Every combination of `threshold` shares is interpolated at zero; combinations that do not
/// produce an integer are ignored and the most frequent result wins, ties going to the
/// result seen first. This tolerates a minority of corrupted shares on a best-effort basis.
pub fn recover_secret(share_set: &ShareSet) -> Result<BigInt, RecoverError> {
    Reconstructor::default().recover(share_set)
}
