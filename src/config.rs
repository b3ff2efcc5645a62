use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::{Matcher, RankingPolicy};
use crate::models::MatchOptions;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub pool: PoolSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    #[serde(default)]
    pub include_inactive: bool,
    pub top_k: Option<usize>,
    #[serde(default)]
    pub min_matched: usize,
    #[serde(default)]
    pub ranking: RankingPolicy,
}

impl MatchingSettings {
    /// Default per-query options
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            include_inactive: self.include_inactive,
            top_k: self.top_k,
            min_matched: self.min_matched,
        }
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(self.ranking)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolSettings {
    #[serde(default = "default_pool_path")]
    pub path: String,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            path: default_pool_path(),
        }
    }
}

fn default_pool_path() -> String { "data/profiles.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BIODATA__)
    /// 5. PROFILE_POOL_PATH, if set
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BIODATA__MATCHING__RANKING -> matching.ranking
            .add_source(environment())
            .build()?;

        apply_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BIODATA")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply well-known unprefixed environment variables
fn apply_overrides(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("PROFILE_POOL_PATH") {
        Ok(path) => Config::builder()
            .add_source(settings)
            .set_override("pool.path", path)?
            .build(),
        Err(_) => Ok(settings),
    }
}
