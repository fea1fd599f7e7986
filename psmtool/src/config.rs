//! Engine configuration for the command line.
//!
//! Settings are merged from defaults, an optional TOML file and the
//! environment, later sources taking precedence.

use crate::CliError;
use psm_engine::EngineSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything the command line can be configured with
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Tunables of the pricing engine (demand shape, dispersion, grid resolution, ...)
    #[serde(default)]
    pub engine: EngineSettings,
}

impl AppConfig {
    /// Load configuration with precedence:
    /// 1. Environment variables (highest priority)
    /// 2. The config file, if one is given
    /// 3. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `PSM_<SECTION>__<KEY>` to `<section>.<key>`:
    ///
    /// ```bash
    /// export PSM_ENGINE__SHAPE=logistic
    /// export PSM_ENGINE__DISPERSION=0.3
    /// ```
    ///
    /// The merged settings are validated before they are returned.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        config = config.add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(CliError::MissingConfig(path.to_path_buf()))?;
            }
            config = config.add_source(config::File::from(path));
        }

        config = config.add_source(
            config::Environment::with_prefix("PSM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = config.build()?.try_deserialize()?;
        loaded.engine.validate()?;
        Ok(loaded)
    }
}
