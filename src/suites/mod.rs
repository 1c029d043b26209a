// src/suites/mod.rs
//! Suites shipped with the crate

pub mod empty;

pub use empty::empty_tests;

use crate::core::Registry;
use crate::error::Result;

/// Registry holding every bundled suite
pub fn default_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    registry.register(empty_tests())?;
    Ok(registry)
}
