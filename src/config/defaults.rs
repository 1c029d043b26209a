// src/config/defaults.rs
use crate::config::app::{FixtureSettings, LoggingSettings, RunSettings};
use crate::consts::{DEFAULT_DATA_DIR_PREFIX, DEFAULT_LOG_FILTER};
use crate::enums::{ChainKind, OutputFormat};

pub fn default_run() -> RunSettings {
    RunSettings {
        run_disabled: false,
        run_test: None,
        format: OutputFormat::Text,
    }
}

pub fn default_fixture() -> FixtureSettings {
    FixtureSettings {
        chain: ChainKind::Main,
        data_dir_prefix: DEFAULT_DATA_DIR_PREFIX.into(),
        keep_data_dir: false,
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        default_run()
    }
}

impl Default for FixtureSettings {
    fn default() -> Self {
        default_fixture()
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        default_logging()
    }
}
