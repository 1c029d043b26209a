// src/fixture/mod.rs
//! Fixtures — setup/teardown capabilities injected into suites
//!
//! A suite names its fixture type; the runner builds a fresh instance
//! for every executed case and tears it down afterwards, whatever the
//! case outcome.

pub mod basic;

pub use basic::BasicTestingSetup;

use crate::config::FixtureSettings;
use crate::error::Result;

pub trait Fixture: Sized {
    fn setup(settings: &FixtureSettings) -> Result<Self>;

    fn teardown(self) -> Result<()> {
        Ok(())
    }
}

/// No-op fixture for suites that need no environment
impl Fixture for () {
    fn setup(_settings: &FixtureSettings) -> Result<Self> {
        Ok(())
    }
}
