// src/config/app.rs
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV, DEFAULT_CONFIG_PATH, RUN_DISABLED_ENV};
use crate::enums::{ChainKind, OutputFormat};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub run: RunSettings,
    pub fixture: FixtureSettings,
    pub logging: LoggingSettings,
}

/// Which units run and how the result is printed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    /// Run disabled suites and cases as if they were enabled
    pub run_disabled: bool,
    /// Filter in `suite[/case]` form, comma-separated
    pub run_test: Option<String>,
    pub format: OutputFormat,
}

/// Settings injected into every fixture construction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixtureSettings {
    pub chain: ChainKind,
    pub data_dir_prefix: String,
    /// Leave the fixture data root on disk after teardown
    pub keep_data_dir: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut conf = if Path::new(&config_path).exists() {
            match load_from(&config_path) {
                Ok(conf) => conf,
                Err(err) => {
                    warn!(path = %config_path, %err, "unreadable config — using built-in defaults");
                    Config::default()
                }
            }
        } else {
            debug!(path = %config_path, "no config file — using built-in defaults");
            Config::default()
        };

        apply_env_overrides(&mut conf);
        conf
    })
}

/// Read and parse a TOML config file. Env overrides are not applied.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn apply_env_overrides(conf: &mut Config) {
    if std::env::var_os(RUN_DISABLED_ENV).is_some() {
        conf.run.run_disabled = true;
    }
}
