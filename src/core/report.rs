// src/core/report.rs
//! Run results — per case, per suite and for the whole run
//!
//! Everything here serializes to JSON for the `--format json` output.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::SkipReason;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    Failed { reason: String },
    Skipped { reason: SkipReason },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CaseOutcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CaseOutcome::Skipped { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub name: String,
    pub outcome: CaseOutcome,
    pub assertions: usize,
    pub failed_assertions: usize,
    pub messages: Vec<String>,
    pub duration_ms: u64,
}

impl CaseReport {
    pub fn skipped(name: &str, reason: SkipReason) -> Self {
        Self {
            name: name.to_owned(),
            outcome: CaseOutcome::Skipped { reason },
            assertions: 0,
            failed_assertions: 0,
            messages: Vec::new(),
            duration_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub name: String,
    pub status: SuiteStatus,
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    /// Status follows from the cases: skipped if none ran, failed if any failed
    pub fn from_cases(name: &str, cases: Vec<CaseReport>) -> Self {
        let status = if cases.iter().all(|c| c.outcome.is_skipped()) {
            SuiteStatus::Skipped
        } else if cases.iter().any(|c| c.outcome.is_failed()) {
            SuiteStatus::Failed
        } else {
            SuiteStatus::Passed
        };

        Self {
            name: name.to_owned(),
            status,
            cases,
        }
    }

    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub suites_run: usize,
    pub suites_skipped: usize,
    pub cases_passed: usize,
    pub cases_failed: usize,
    pub cases_skipped: usize,
    pub assertions: usize,
    pub failed_assertions: usize,
    pub messages: usize,
}

impl RunSummary {
    pub fn cases_run(&self) -> usize {
        self.cases_passed + self.cases_failed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub suites: Vec<SuiteReport>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>, suites: Vec<SuiteReport>) -> Self {
        Self { started_at, suites }
    }

    pub fn suite(&self, name: &str) -> Option<&SuiteReport> {
        self.suites.iter().find(|s| s.name == name)
    }

    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for suite in &self.suites {
            if suite.status == SuiteStatus::Skipped {
                summary.suites_skipped += 1;
            } else {
                summary.suites_run += 1;
            }
            for case in &suite.cases {
                match case.outcome {
                    CaseOutcome::Passed => summary.cases_passed += 1,
                    CaseOutcome::Failed { .. } => summary.cases_failed += 1,
                    CaseOutcome::Skipped { .. } => summary.cases_skipped += 1,
                }
                summary.assertions += case.assertions;
                summary.failed_assertions += case.failed_assertions;
                summary.messages += case.messages.len();
            }
        }
        summary
    }

    /// True when no executed case failed; an all-skipped run passes
    pub fn passed(&self) -> bool {
        self.suites.iter().all(|s| s.status != SuiteStatus::Failed)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for suite in &self.suites {
            let _ = writeln!(out, "suite {} ... {}", suite.name, status_label(suite.status));
            for case in &suite.cases {
                let outcome = match &case.outcome {
                    CaseOutcome::Passed => "ok".to_owned(),
                    CaseOutcome::Failed { reason } => format!("FAILED ({reason})"),
                    CaseOutcome::Skipped { reason } => format!("skipped ({reason})"),
                };
                let _ = writeln!(out, "  case {} ... {}", case.name, outcome);
                for message in &case.messages {
                    let _ = writeln!(out, "    > {message}");
                }
            }
        }

        let s = self.summary();
        let _ = writeln!(
            out,
            "\n{} passed; {} failed; {} skipped; {} assertion(s), {} failed",
            s.cases_passed, s.cases_failed, s.cases_skipped, s.assertions, s.failed_assertions
        );
        out
    }
}

fn status_label(status: SuiteStatus) -> &'static str {
    match status {
        SuiteStatus::Passed => "ok",
        SuiteStatus::Failed => "FAILED",
        SuiteStatus::Skipped => "skipped",
    }
}
