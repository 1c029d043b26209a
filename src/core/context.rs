// src/core/context.rs
//! Per-case context handed to every test body
//!
//! Collects diagnostic messages and assertion results while the body
//! runs; the runner turns it into a `CaseReport` afterwards.

use tracing::{info, warn};

use crate::consts::MESSAGE_TARGET;
use crate::error::{Result, SuiteError};

#[derive(Debug, Clone)]
pub struct TestContext {
    suite: String,
    case: String,
    messages: Vec<String>,
    assertions: usize,
    failures: Vec<String>,
}

impl TestContext {
    pub fn new(suite: &str, case: &str) -> Self {
        Self {
            suite: suite.to_owned(),
            case: case.to_owned(),
            messages: Vec::new(),
            assertions: 0,
            failures: Vec::new(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn case(&self) -> &str {
        &self.case
    }

    /// Emit a diagnostic message to the run output
    pub fn message(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!(target: MESSAGE_TARGET, suite = %self.suite, case = %self.case, "{text}");
        self.messages.push(text);
    }

    /// Non-fatal assertion: a false `cond` fails the case but the body keeps going
    pub fn check(&mut self, cond: bool, description: &str) -> bool {
        self.assertions += 1;
        if !cond {
            warn!(suite = %self.suite, case = %self.case, "check failed: {description}");
            self.failures.push(description.to_owned());
        }
        cond
    }

    /// Fatal assertion: returns `Err` so the body can bail out with `?`
    pub fn require(&mut self, cond: bool, description: &str) -> Result<()> {
        if self.check(cond, description) {
            Ok(())
        } else {
            Err(SuiteError::Requirement(description.to_owned()))
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn assertions(&self) -> usize {
        self.assertions
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, usize, Vec<String>) {
        (self.messages, self.assertions, self.failures)
    }
}
