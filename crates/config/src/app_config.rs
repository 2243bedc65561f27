// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, resolve_config_path};
use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sss_recover::reconstruct::DEFAULT_BATCH_SIZE;
use sss_recover::RecoveryOptions;
use std::{env, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "sss.config.yaml";
pub const ENV_PREFIX: &str = "SSS_";

/// Environment keys read under [`ENV_PREFIX`]. Other `SSS_*` variables are left alone.
const ENV_KEYS: &[&str] = &["parallel", "batch_size"];

/// Settings read from the configuration file and environment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Interpolate combinations on a thread pool
    parallel: bool,
    /// Combinations per parallel batch
    batch_size: usize,
    /// The file this configuration was read from, if any
    #[serde(skip)]
    config_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            batch_size: DEFAULT_BATCH_SIZE,
            config_file: None,
        }
    }
}

impl AppConfig {
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn config_file(&self) -> Option<&PathBuf> {
        self.config_file.as_ref()
    }

    pub fn recovery_options(&self) -> RecoveryOptions {
        RecoveryOptions {
            parallel: self.parallel,
            batch_size: self.batch_size,
        }
    }

    fn validate(self) -> Result<Self> {
        if self.batch_size == 0 {
            bail!("batch_size must be at least 1");
        }
        Ok(self)
    }
}

/// Values passed on the command line. `None` leaves the configured value alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
}

/// Loads configuration from defaults, the resolved YAML file, `SSS_*` environment variables
/// and finally the command line, later sources overriding earlier ones.
///
/// A missing file is only an error when it was named explicitly.
pub fn load_config(cli_file: Option<String>, overrides: CliOverrides) -> Result<AppConfig> {
    let explicit = cli_file.is_some();
    let default_config_dir = dirs::config_dir()
        .map(|dir| dir.join("sss"))
        .unwrap_or_else(|| PathBuf::from("."));

    let resolved = resolve_config_path(
        find_in_parent,
        env::current_dir()?,
        default_config_dir,
        DEFAULT_CONFIG_NAME,
        cli_file.map(PathBuf::from),
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let config_file = if resolved.exists() {
        debug!(path = ?resolved, "Reading configuration file");
        figment = figment.merge(Yaml::file(&resolved));
        Some(resolved)
    } else if explicit {
        bail!("Configuration file {} not found", resolved.display());
    } else {
        None
    };

    let mut config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).only(ENV_KEYS))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;
    config.config_file = config_file;

    config.validate()
}
