// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Requirement failed: {0}")]
    Requirement(String),

    #[error("Suite `{0}` is already registered")]
    DuplicateSuite(String),

    #[error("Case `{case}` is registered twice in suite `{suite}`")]
    DuplicateCase { suite: String, case: String },

    #[error("No registered test unit matches `{0}`")]
    UnknownUnit(String),

    #[error("Invalid test filter `{0}`")]
    InvalidFilter(String),

    #[error("Unknown chain `{0}` (expected main, test, devnet or regtest)")]
    UnknownChain(String),
}

pub type Result<T> = std::result::Result<T, SuiteError>;
