// src/consts.rs
//! Shared constants — names, defaults and env variables

/// Env var naming the TOML config file
pub const CONFIG_ENV: &str = "SUITE_CONFIG";

/// Config file read when `SUITE_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "suite-config.toml";

/// Any value forces disabled suites to run
pub const RUN_DISABLED_ENV: &str = "SUITE_RUN_DISABLED";

/// Prefix of every fixture data root under the system temp dir
pub const DEFAULT_DATA_DIR_PREFIX: &str = "test_common_";

/// Default `EnvFilter` directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Tracing target of `TestContext::message`
pub const MESSAGE_TARGET: &str = "suite_harness::message";

/// Separator between suite and case in a filter pattern
pub const FILTER_PATH_SEPARATOR: char = '/';

/// Separator between filter patterns
pub const FILTER_LIST_SEPARATOR: char = ',';

/// Wildcard matching any suite or case name
pub const FILTER_WILDCARD: &str = "*";
