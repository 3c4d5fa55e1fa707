use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-local config file picked up when no custom file is given
pub const LOCAL_CONFIG_FILE: &str = "chunkmill.toml";

/// Environment variable prefix, nested keys split on `__`
pub const ENV_PREFIX: &str = "CHUNKMILL_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkmillConfig {
    pub io: IoConfig,
}

/// Where the pipeline reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ChunkmillConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    /// Load defaults, then the custom (or local) file, then environment variables
    pub fn load_with_custom_config(custom_config: Option<&Path>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: custom file = {:?}", custom_config);

        let mut figment = Self::base_figment(custom_config);

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: ChunkmillConfig = figment
            .extract()
            .context("Failed to parse chunkmill configuration")?;
        tracing::debug!(
            "Loaded config: input = {}, output = {}",
            config.io.input.display(),
            config.io.output.display()
        );
        Ok(config)
    }

    /// Embedded defaults plus file sources, without the environment layer
    fn base_figment(custom_config: Option<&Path>) -> Figment {
        let figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        match custom_config {
            Some(custom_path) => figment.merge(Toml::file(custom_path)),
            None => figment.merge(Toml::file(LOCAL_CONFIG_FILE)),
        }
    }
}

impl Default for ChunkmillConfig {
    fn default() -> Self {
        Self {
            io: IoConfig {
                input: PathBuf::from("large-input.txt"),
                output: PathBuf::from("processed-output.txt"),
            },
        }
    }
}
