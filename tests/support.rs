// tests/support.rs
//! Test fixtures that record their own lifecycle
//!
//! Cases run on the calling thread, so thread-local counters stay
//! isolated between concurrently running tests.

use std::cell::RefCell;

use suite_harness::config::FixtureSettings;
use suite_harness::{Fixture, SuiteError};

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

#[allow(dead_code)]
pub fn events() -> Vec<String> {
    EVENTS.with(|e| e.borrow().clone())
}

#[allow(dead_code)]
pub fn reset_events() {
    EVENTS.with(|e| e.borrow_mut().clear());
}

fn record(event: impl Into<String>) {
    EVENTS.with(|e| e.borrow_mut().push(event.into()));
}

/// Records `setup` / `teardown` and counts body invocations
#[derive(Debug, Default)]
pub struct RecordingFixture {
    pub calls: usize,
}

impl Fixture for RecordingFixture {
    fn setup(_settings: &FixtureSettings) -> suite_harness::Result<Self> {
        record("setup");
        Ok(Self::default())
    }

    fn teardown(self) -> suite_harness::Result<()> {
        record(format!("teardown calls={}", self.calls));
        Ok(())
    }
}

/// Setup always fails
#[allow(dead_code)]
#[derive(Debug)]
pub struct BrokenSetup;

impl Fixture for BrokenSetup {
    fn setup(_settings: &FixtureSettings) -> suite_harness::Result<Self> {
        record("broken setup");
        Err(SuiteError::Fixture("no environment".into()))
    }
}

/// Teardown always fails
#[allow(dead_code)]
#[derive(Debug)]
pub struct BrokenTeardown;

impl Fixture for BrokenTeardown {
    fn setup(_settings: &FixtureSettings) -> suite_harness::Result<Self> {
        Ok(BrokenTeardown)
    }

    fn teardown(self) -> suite_harness::Result<()> {
        record("broken teardown");
        Err(SuiteError::Fixture("cleanup refused".into()))
    }
}

/// Setup panics instead of returning an error
#[allow(dead_code)]
#[derive(Debug)]
pub struct PanickySetup;

impl Fixture for PanickySetup {
    fn setup(_settings: &FixtureSettings) -> suite_harness::Result<Self> {
        record("panicky setup");
        panic!("setup exploded")
    }
}

/// Teardown panics instead of returning an error
#[allow(dead_code)]
#[derive(Debug)]
pub struct PanickyTeardown;

impl Fixture for PanickyTeardown {
    fn setup(_settings: &FixtureSettings) -> suite_harness::Result<Self> {
        Ok(PanickyTeardown)
    }

    fn teardown(self) -> suite_harness::Result<()> {
        record("panicky teardown");
        panic!("teardown exploded")
    }
}
