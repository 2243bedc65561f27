// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use num_bigint::{BigInt, BigUint};
use sss_config::AppConfig;
use sss_decode::ShareFile;
use sss_recover::{Reconstructor, RecoveryObserver, TracingObserver};
use tracing::{error, info, instrument};

/// Writes the reconstruction summary to stderr, leaving stdout to the results.
struct ConsoleObserver;

impl RecoveryObserver for ConsoleObserver {
    fn on_combination_count(&self, total: &BigUint) {
        eprintln!("Generated {} combinations", total);
    }

    fn on_interpolated(&self, valid: u64, attempted: u64) {
        eprintln!("Valid combinations: {}/{}", valid, attempted);
    }

    fn on_candidate(&self, secret: &BigInt, count: usize) {
        eprintln!("Secret candidate: {} (appears {} times)", secret, count);
    }
}

/// Recovers every file in turn. One failing file does not stop the others.
///
/// Unless `quiet` is set the combination summary of each file is printed to stderr.
pub fn execute(files: &[PathBuf], config: &AppConfig, quiet: bool) -> Result<()> {
    let mut failed = 0;

    for file in files {
        match recover_file(file, config, quiet) {
            Ok(secret) => println!("Secret for {}: {}", file.display(), secret),
            Err(err) => {
                error!("{:#}", err);
                println!("Failed to find secret for {}", file.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} share files failed", failed, files.len());
    }

    Ok(())
}

#[instrument(skip_all, fields(file = %file.display()))]
fn recover_file(file: &Path, config: &AppConfig, quiet: bool) -> Result<BigInt> {
    let share_file = ShareFile::from_path(file)
        .with_context(|| format!("Could not read share file {}", file.display()))?;
    let keys = share_file.keys()?.clone();
    let share_set = share_file.into_share_set()?;

    info!(
        n = keys.n,
        k = keys.k,
        points = share_set.len(),
        "Processing file"
    );

    let reconstructor = Reconstructor::new(config.recovery_options());
    let reconstructor = if quiet {
        reconstructor.with_observer(TracingObserver::new(file.display().to_string()))
    } else {
        eprintln!(
            "Processing {}: n = {}, k = {}, {} points",
            file.display(),
            keys.n,
            keys.k,
            share_set.len()
        );
        reconstructor.with_observer(ConsoleObserver)
    };
    let secret = reconstructor
        .recover(&share_set)
        .with_context(|| format!("No secret in {}", file.display()))?;

    Ok(secret)
}
