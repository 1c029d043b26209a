// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: chains, report
//! formats and the reasons a case did not run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SuiteError;

/// Network selected by `BasicTestingSetup`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    #[default]
    Main,
    #[serde(rename = "test")]
    Testnet,
    Devnet,
    Regtest,
}

impl ChainKind {
    pub fn name(self) -> &'static str {
        match self {
            ChainKind::Main => "main",
            ChainKind::Testnet => "test",
            ChainKind::Devnet => "devnet",
            ChainKind::Regtest => "regtest",
        }
    }

    /// Sub-directory of the data root holding this chain's files.
    /// Main lives directly in the root.
    pub fn data_subdir(self) -> &'static str {
        match self {
            ChainKind::Main => "",
            ChainKind::Testnet => "testnet3",
            ChainKind::Devnet => "devnet",
            ChainKind::Regtest => "regtest",
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainKind {
    type Err = SuiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(ChainKind::Main),
            "test" | "testnet" => Ok(ChainKind::Testnet),
            "devnet" => Ok(ChainKind::Devnet),
            "regtest" => Ok(ChainKind::Regtest),
            other => Err(SuiteError::UnknownChain(other.to_owned())),
        }
    }
}

/// How the runner prints a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Why a case was reported without running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    SuiteDisabled,
    CaseDisabled,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SuiteDisabled => f.write_str("suite disabled"),
            SkipReason::CaseDisabled => f.write_str("case disabled"),
        }
    }
}
