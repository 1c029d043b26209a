// src/fixture/basic.rs
//! Basic node testing environment: selected chain + private data directory

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info};

use crate::config::FixtureSettings;
use crate::enums::ChainKind;
use crate::error::{Result, SuiteError};
use crate::fixture::Fixture;

#[derive(Debug)]
pub struct BasicTestingSetup {
    chain: ChainKind,
    root: TempDir,
    chain_dir: PathBuf,
    keep_data_dir: bool,
}

impl BasicTestingSetup {
    pub fn chain(&self) -> ChainKind {
        self.chain
    }

    /// Data root of this instance, unique per fixture
    pub fn datadir(&self) -> &Path {
        self.root.path()
    }

    /// Network-specific directory below the data root
    pub fn chain_datadir(&self) -> &Path {
        &self.chain_dir
    }
}

impl Fixture for BasicTestingSetup {
    fn setup(settings: &FixtureSettings) -> Result<Self> {
        if settings.data_dir_prefix.is_empty() {
            return Err(SuiteError::Fixture("data_dir_prefix must not be empty".into()));
        }

        let root = tempfile::Builder::new()
            .prefix(&settings.data_dir_prefix)
            .tempdir()?;

        let chain_dir = root.path().join(settings.chain.data_subdir());
        fs::create_dir_all(&chain_dir)?;

        debug!(chain = %settings.chain, datadir = %root.path().display(), "fixture ready");

        Ok(Self {
            chain: settings.chain,
            root,
            chain_dir,
            keep_data_dir: settings.keep_data_dir,
        })
    }

    fn teardown(self) -> Result<()> {
        if self.keep_data_dir {
            let kept = self.root.keep();
            info!(datadir = %kept.display(), "keeping fixture data directory");
            return Ok(());
        }

        let path = self.root.path().to_path_buf();
        self.root.close()?;
        debug!(datadir = %path.display(), "fixture data directory removed");
        Ok(())
    }
}
