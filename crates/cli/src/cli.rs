// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{decode, recover};
use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use sss_config::{load_config, AppConfig, CliOverrides};
use tracing::{info, instrument, Level};

#[derive(Parser, Debug)]
#[command(name = "sss-recover")]
#[command(about = "Recover Shamir secrets from share files, outvoting corrupted shares", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `sss-recover -vvv` will
    /// give you trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,

    /// Interpolate combinations on all available cores
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    parallel: bool,

    /// Number of combinations handed to the thread pool at a time
    #[arg(long = "batch-size", global = true)]
    batch_size: Option<usize>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub fn execute(self) -> Result<()> {
        setup_simple_tracing(self.log_level());

        let config = self.load_config()?;
        info!("Config loaded from: {:?}", config.config_file());

        match self.command {
            Commands::Recover { files } => recover::execute(&files, &config, self.quiet)?,
            Commands::Decode { file } => decode::execute(&file)?,
        }

        Ok(())
    }

    pub fn load_config(&self) -> Result<AppConfig> {
        let overrides = CliOverrides {
            // An absent flag must not override `parallel: true` from the file
            parallel: self.parallel.then_some(true),
            batch_size: self.batch_size,
        };
        load_config(self.config.clone(), overrides)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recover the secret of every given share file
    ///
    /// Secrets are printed to stdout and the combination summary of each file to stderr.
    /// Pass `-q` to print only the secrets.
    Recover {
        /// JSON share files
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,
    },

    /// Print the decoded shares of a file without recovering
    Decode {
        /// JSON share file
        file: PathBuf,
    },
}
