// src/core/registry.rs
//! Suite registration and whole-run execution

use std::collections::HashSet;

use chrono::Utc;
use tracing::info;

use crate::config::{Config, FixtureSettings};
use crate::core::filter::Selection;
use crate::core::report::RunReport;
use crate::core::suite::{CaseInfo, RunnableSuite, SuiteRun};
use crate::error::{Result, SuiteError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Treat disabled suites and cases as enabled
    pub run_disabled: bool,
    pub selection: Option<Selection>,
    pub fixture: FixtureSettings,
}

impl RunOptions {
    /// Disabled units run like any other
    pub fn forced() -> Self {
        Self {
            run_disabled: true,
            ..Self::default()
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_filter(config, None)
    }

    /// Like `from_config`, but `run_test` replaces the config filter,
    /// which is then never parsed
    pub fn from_config_with_filter(config: &Config, run_test: Option<&str>) -> Result<Self> {
        let selection = run_test
            .or(config.run.run_test.as_deref())
            .map(Selection::parse)
            .transpose()?;

        Ok(Self {
            run_disabled: config.run.run_disabled,
            selection,
            fixture: config.fixture.clone(),
        })
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteInfo {
    pub name: String,
    pub disabled: bool,
    pub cases: Vec<CaseInfo>,
}

#[derive(Default)]
pub struct Registry {
    suites: Vec<Box<dyn RunnableSuite>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suite; names must be unique, and so must case names inside it
    pub fn register<S: RunnableSuite + 'static>(&mut self, suite: S) -> Result<()> {
        if self.suites.iter().any(|s| s.name() == suite.name()) {
            return Err(SuiteError::DuplicateSuite(suite.name().to_owned()));
        }

        let mut seen = HashSet::new();
        for case in suite.cases() {
            if !seen.insert(case.name.clone()) {
                return Err(SuiteError::DuplicateCase {
                    suite: suite.name().to_owned(),
                    case: case.name,
                });
            }
        }

        self.suites.push(Box::new(suite));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn units(&self) -> Vec<SuiteInfo> {
        self.suites
            .iter()
            .map(|s| SuiteInfo {
                name: s.name().to_owned(),
                disabled: s.is_disabled(),
                cases: s.cases(),
            })
            .collect()
    }

    pub fn run(&self, options: &RunOptions) -> Result<RunReport> {
        if let Some(selection) = &options.selection {
            self.check_selection(selection)?;
        }

        let started_at = Utc::now();
        let run = SuiteRun {
            run_disabled: options.run_disabled,
            selection: options.selection.as_ref(),
            fixture: &options.fixture,
        };

        let suites = self.suites.iter().filter_map(|s| s.run(&run)).collect();
        let report = RunReport::new(started_at, suites);

        let summary = report.summary();
        info!(
            passed = summary.cases_passed,
            failed = summary.cases_failed,
            skipped = summary.cases_skipped,
            "test run finished"
        );
        Ok(report)
    }

    /// Every pattern that spells out a name must hit a registered unit
    fn check_selection(&self, selection: &Selection) -> Result<()> {
        for pattern in selection.patterns() {
            if !pattern.has_exact_part() {
                continue;
            }
            let hit = self.suites.iter().any(|s| {
                pattern.matches_suite(s.name())
                    && (pattern.case.as_ref().is_none_or(|c| !c.is_exact())
                        || s.cases().iter().any(|c| pattern.matches_case(s.name(), &c.name)))
            });
            if !hit {
                return Err(SuiteError::UnknownUnit(pattern.to_string()));
            }
        }
        Ok(())
    }
}
