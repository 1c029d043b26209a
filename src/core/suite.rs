// src/core/suite.rs
//! Fixture suites and their execution
//!
//! `Suite<F>` ties an ordered list of cases to one fixture type.
//! `RunnableSuite` erases `F` so suites with different fixtures can
//! share a registry.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::FixtureSettings;
use crate::core::case::TestCase;
use crate::core::context::TestContext;
use crate::core::filter::Selection;
use crate::core::report::{CaseOutcome, CaseReport, SuiteReport};
use crate::enums::SkipReason;
use crate::error::{Result, SuiteError};
use crate::fixture::Fixture;

/// Inputs shared by every suite of one run
#[derive(Debug, Clone, Copy)]
pub struct SuiteRun<'a> {
    pub run_disabled: bool,
    pub selection: Option<&'a Selection>,
    pub fixture: &'a FixtureSettings,
}

impl SuiteRun<'_> {
    fn suite_enabled(&self, suite: &str, disabled: bool) -> bool {
        !disabled || self.run_disabled || self.selection.is_some_and(|s| s.names_suite(suite))
    }

    fn case_enabled(&self, suite: &str, case: &str, disabled: bool) -> bool {
        !disabled || self.run_disabled || self.selection.is_some_and(|s| s.names_case(suite, case))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseInfo {
    pub name: String,
    pub disabled: bool,
}

pub trait RunnableSuite: Send + Sync {
    fn name(&self) -> &str;

    fn is_disabled(&self) -> bool;

    fn cases(&self) -> Vec<CaseInfo>;

    /// `None` when the selection does not reach this suite at all
    fn run(&self, run: &SuiteRun<'_>) -> Option<SuiteReport>;
}

pub struct Suite<F: Fixture> {
    name: String,
    disabled: bool,
    cases: Vec<TestCase<F>>,
}

impl<F: Fixture> Suite<F> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disabled: false,
            cases: Vec::new(),
        }
    }

    /// Mark the whole suite as skipped by default runs
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn case<B>(self, name: impl Into<String>, body: B) -> Self
    where
        B: Fn(&mut F, &mut TestContext) -> Result<()> + Send + Sync + 'static,
    {
        self.add_case(TestCase::new(name, body))
    }

    pub fn add_case(mut self, case: TestCase<F>) -> Self {
        self.cases.push(case);
        self
    }

    fn run_case(&self, case: &TestCase<F>, settings: &FixtureSettings) -> CaseReport {
        let mut ctx = TestContext::new(&self.name, case.name());
        let started = Instant::now();

        // A panicking fixture fails this case only; the rest of the run goes on.
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| F::setup(settings))) {
            Err(payload) => CaseOutcome::Failed {
                reason: format!("fixture setup panicked: {}", panic_message(&*payload)),
            },
            Ok(Err(err)) => CaseOutcome::Failed {
                reason: format!("fixture setup failed: {err}"),
            },
            Ok(Ok(mut fixture)) => {
                let body =
                    panic::catch_unwind(AssertUnwindSafe(|| case.invoke(&mut fixture, &mut ctx)));
                let teardown = panic::catch_unwind(AssertUnwindSafe(|| fixture.teardown()))
                    .unwrap_or_else(|payload| {
                        Err(SuiteError::Fixture(format!(
                            "teardown panicked: {}",
                            panic_message(&*payload)
                        )))
                    });
                settle(body, teardown, &ctx)
            }
        };

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &outcome {
            CaseOutcome::Failed { reason } => {
                warn!(suite = %self.name, case = %case.name(), %reason, "case failed")
            }
            _ => debug!(suite = %self.name, case = %case.name(), duration_ms, "case passed"),
        }

        let (messages, assertions, failures) = ctx.into_parts();
        CaseReport {
            name: case.name().to_owned(),
            outcome,
            assertions,
            failed_assertions: failures.len(),
            messages,
            duration_ms,
        }
    }
}

impl<F: Fixture> RunnableSuite for Suite<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn cases(&self) -> Vec<CaseInfo> {
        self.cases
            .iter()
            .map(|c| CaseInfo {
                name: c.name().to_owned(),
                disabled: c.is_disabled(),
            })
            .collect()
    }

    fn run(&self, run: &SuiteRun<'_>) -> Option<SuiteReport> {
        if run.selection.is_some_and(|s| !s.selects_suite(&self.name)) {
            return None;
        }

        let suite_enabled = run.suite_enabled(&self.name, self.disabled);
        if suite_enabled {
            info!(suite = %self.name, cases = self.cases.len(), "running suite");
        } else {
            debug!(suite = %self.name, "suite disabled — skipping");
        }

        let mut reports = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            if run
                .selection
                .is_some_and(|s| !s.selects_case(&self.name, case.name()))
            {
                continue;
            }

            let report = if !suite_enabled {
                CaseReport::skipped(case.name(), SkipReason::SuiteDisabled)
            } else if !run.case_enabled(&self.name, case.name(), case.is_disabled()) {
                CaseReport::skipped(case.name(), SkipReason::CaseDisabled)
            } else {
                self.run_case(case, run.fixture)
            };
            reports.push(report);
        }

        Some(SuiteReport::from_cases(&self.name, reports))
    }
}

impl<F: Fixture> fmt::Debug for Suite<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.name)
            .field("disabled", &self.disabled)
            .field("fixture", &std::any::type_name::<F>())
            .field("cases", &self.cases)
            .finish()
    }
}

/// First failure wins; a teardown error only fails an otherwise clean case
fn settle(
    body: std::thread::Result<Result<()>>,
    teardown: Result<()>,
    ctx: &TestContext,
) -> CaseOutcome {
    let failure = match body {
        Err(payload) => Some(format!("panicked: {}", panic_message(&*payload))),
        Ok(Err(err)) => Some(err.to_string()),
        Ok(Ok(())) if !ctx.failures().is_empty() => Some(format!(
            "{} check(s) failed: {}",
            ctx.failures().len(),
            ctx.failures().join("; ")
        )),
        Ok(Ok(())) => None,
    };

    match (failure, teardown) {
        (Some(reason), Ok(())) => CaseOutcome::Failed { reason },
        (Some(reason), Err(err)) => {
            warn!(suite = %ctx.suite(), case = %ctx.case(), %err, "fixture teardown failed after case failure");
            CaseOutcome::Failed { reason }
        }
        (None, Err(err)) => CaseOutcome::Failed {
            reason: format!("fixture teardown failed: {err}"),
        },
        (None, Ok(())) => CaseOutcome::Passed,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
