// src/lib.rs
//! suite-harness — fixture-backed test suites that can be disabled
//!
//! Features:
//! - Suites bound to a setup/teardown fixture, fresh per case
//! - Disabled suites and cases, enabled by name or by force
//! - `suite[/case]` run filters
//! - Per-case diagnostic messages and assertion counts
//! - Text and JSON run reports

pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod fixture;
#[cfg(feature = "logging")]
pub mod logging;
pub mod suites;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::{
    CaseOutcome, CaseReport, Registry, RunOptions, RunReport, RunSummary, Selection, Suite,
    SuiteReport, SuiteStatus, TestCase, TestContext,
};
pub use enums::{ChainKind, OutputFormat, SkipReason};
pub use error::{Result, SuiteError};
pub use fixture::{BasicTestingSetup, Fixture};
pub use suites::default_registry;
