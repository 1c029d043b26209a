// src/config/mod.rs
//! Configuration system for suite-harness
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{
    apply_env_overrides, from_toml_str, load, load_from, Config, FixtureSettings,
    LoggingSettings, RunSettings,
};

mod app;
mod defaults;
