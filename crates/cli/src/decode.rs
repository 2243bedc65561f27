// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};
use sss_decode::ShareFile;

pub fn execute(file: &Path) -> Result<()> {
    let share_set = ShareFile::from_path(file)
        .and_then(ShareFile::into_share_set)
        .with_context(|| format!("Could not decode share file {}", file.display()))?;

    for point in share_set.points() {
        println!("{}: {}", point.x(), point.y());
    }
    println!(
        "{} combinations of {} out of {} shares",
        share_set.combination_count(),
        share_set.threshold(),
        share_set.len()
    );

    Ok(())
}
