// src/core/filter.rs
//! `--run_test` style unit selection
//!
//! A selection is a comma-separated list of `suite[/case]` patterns.
//! Either part may be `*`. A disabled unit is only enabled by a pattern
//! that spells out its name; wildcards never enable it.

use std::fmt;
use std::str::FromStr;

use crate::consts::{FILTER_LIST_SEPARATOR, FILTER_PATH_SEPARATOR, FILTER_WILDCARD};
use crate::error::{Result, SuiteError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePattern {
    Any,
    Exact(String),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            NamePattern::Any => true,
            NamePattern::Exact(expected) => expected == name,
        }
    }

    /// True only for an exact pattern equal to `name`
    pub fn names(&self, name: &str) -> bool {
        matches!(self, NamePattern::Exact(expected) if expected == name)
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, NamePattern::Exact(_))
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePattern::Any => f.write_str(FILTER_WILDCARD),
            NamePattern::Exact(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPattern {
    pub suite: NamePattern,
    /// `None` selects every case of the matched suites
    pub case: Option<NamePattern>,
}

impl UnitPattern {
    pub fn matches_suite(&self, suite: &str) -> bool {
        self.suite.matches(suite)
    }

    pub fn matches_case(&self, suite: &str, case: &str) -> bool {
        self.matches_suite(suite) && self.case.as_ref().is_none_or(|p| p.matches(case))
    }

    pub fn names_suite(&self, suite: &str) -> bool {
        self.suite.names(suite)
    }

    pub fn names_case(&self, suite: &str, case: &str) -> bool {
        self.names_suite(suite) && self.case.as_ref().is_some_and(|p| p.names(case))
    }

    /// Patterns made only of wildcards can never name a missing unit
    pub fn has_exact_part(&self) -> bool {
        self.suite.is_exact() || self.case.as_ref().is_some_and(NamePattern::is_exact)
    }

    fn parse(raw: &str, input: &str) -> Result<Self> {
        let invalid = || SuiteError::InvalidFilter(input.to_owned());

        let mut parts = raw.split(FILTER_PATH_SEPARATOR).map(str::trim);
        let suite = parts.next().map(parse_name).ok_or_else(invalid)?.ok_or_else(invalid)?;
        let case = match parts.next() {
            Some(part) => Some(parse_name(part).ok_or_else(invalid)?),
            None => None,
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { suite, case })
    }
}

impl fmt::Display for UnitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.case {
            Some(case) => write!(f, "{}{}{}", self.suite, FILTER_PATH_SEPARATOR, case),
            None => write!(f, "{}", self.suite),
        }
    }
}

fn parse_name(part: &str) -> Option<NamePattern> {
    match part {
        "" => None,
        FILTER_WILDCARD => Some(NamePattern::Any),
        name => Some(NamePattern::Exact(name.to_owned())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    patterns: Vec<UnitPattern>,
}

impl Selection {
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(SuiteError::InvalidFilter(input.to_owned()));
        }

        let patterns = input
            .split(FILTER_LIST_SEPARATOR)
            .map(str::trim)
            .map(|raw| UnitPattern::parse(raw, input))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> &[UnitPattern] {
        &self.patterns
    }

    pub fn selects_suite(&self, suite: &str) -> bool {
        self.patterns.iter().any(|p| p.matches_suite(suite))
    }

    pub fn selects_case(&self, suite: &str, case: &str) -> bool {
        self.patterns.iter().any(|p| p.matches_case(suite, case))
    }

    pub fn names_suite(&self, suite: &str) -> bool {
        self.patterns.iter().any(|p| p.names_suite(suite))
    }

    pub fn names_case(&self, suite: &str, case: &str) -> bool {
        self.patterns.iter().any(|p| p.names_case(suite, case))
    }
}

impl FromStr for Selection {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self> {
        Selection::parse(s)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, "{FILTER_LIST_SEPARATOR}")?;
            }
            write!(f, "{pattern}")?;
        }
        Ok(())
    }
}
