// tests/fixture_tests.rs
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use suite_harness::config::FixtureSettings;
use suite_harness::{
    BasicTestingSetup, ChainKind, Fixture, Registry, RunOptions, Suite, SuiteError, SuiteStatus,
};

mod common;

fn settings(chain: ChainKind) -> FixtureSettings {
    FixtureSettings {
        chain,
        ..FixtureSettings::default()
    }
}

#[test]
fn test_setup_creates_chain_datadir() {
    common::setup();
    let setup = BasicTestingSetup::setup(&settings(ChainKind::Regtest)).unwrap();

    assert_eq!(setup.chain(), ChainKind::Regtest);
    assert!(setup.datadir().is_dir());
    assert_eq!(setup.chain_datadir(), setup.datadir().join("regtest"));
    assert!(setup.chain_datadir().is_dir());

    let dir_name = setup.datadir().file_name().unwrap().to_str().unwrap();
    assert!(dir_name.starts_with("test_common_"));

    let root = setup.datadir().to_path_buf();
    setup.teardown().unwrap();
    assert!(!root.exists());
}

#[test]
fn test_main_chain_uses_datadir_root() {
    let setup = BasicTestingSetup::setup(&FixtureSettings::default()).unwrap();
    assert_eq!(setup.chain(), ChainKind::Main);
    assert_eq!(setup.chain_datadir(), setup.datadir());
    setup.teardown().unwrap();
}

#[test]
fn test_each_setup_gets_its_own_datadir() {
    let a = BasicTestingSetup::setup(&settings(ChainKind::Testnet)).unwrap();
    let b = BasicTestingSetup::setup(&settings(ChainKind::Testnet)).unwrap();
    assert_ne!(a.datadir(), b.datadir());
    assert!(a.chain_datadir().ends_with("testnet3"));
    a.teardown().unwrap();
    b.teardown().unwrap();
}

#[test]
fn test_keep_data_dir_survives_teardown() {
    let settings = FixtureSettings {
        keep_data_dir: true,
        data_dir_prefix: "kept_fixture_".into(),
        ..FixtureSettings::default()
    };
    let setup = BasicTestingSetup::setup(&settings).unwrap();
    let root = setup.datadir().to_path_buf();

    setup.teardown().unwrap();
    assert!(root.is_dir());
    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_empty_prefix_is_rejected() {
    let settings = FixtureSettings {
        data_dir_prefix: String::new(),
        ..FixtureSettings::default()
    };
    let err = BasicTestingSetup::setup(&settings).unwrap_err();
    assert!(matches!(err, SuiteError::Fixture(_)));
}

#[test]
fn test_suite_case_writes_into_its_datadir() {
    common::setup();
    let seen: Arc<Mutex<Option<PathBuf>>> = Arc::new(Mutex::new(None));
    let seen_in_case = Arc::clone(&seen);

    let mut registry = Registry::new();
    registry
        .register(
            Suite::<BasicTestingSetup>::new("datadir").case("write", move |setup, ctx| {
                let file = setup.chain_datadir().join("blocks.dat");
                fs::write(&file, b"genesis")?;
                ctx.check(file.is_file(), "file written");
                *seen_in_case.lock().unwrap() = Some(setup.datadir().to_path_buf());
                Ok(())
            }),
        )
        .unwrap();

    let options = RunOptions {
        fixture: settings(ChainKind::Regtest),
        ..RunOptions::default()
    };
    let report = registry.run(&options).unwrap();

    assert_eq!(report.suites[0].status, SuiteStatus::Passed);
    assert_eq!(report.summary().assertions, 1);
    let root = seen.lock().unwrap().clone().expect("case ran");
    assert!(!root.exists());
}

#[test]
fn test_chain_names_round_trip() {
    for chain in [
        ChainKind::Main,
        ChainKind::Testnet,
        ChainKind::Devnet,
        ChainKind::Regtest,
    ] {
        assert_eq!(chain.to_string().parse::<ChainKind>().unwrap(), chain);
    }
    assert_eq!("TESTNET".parse::<ChainKind>().unwrap(), ChainKind::Testnet);
    assert!(matches!(
        "signet".parse::<ChainKind>(),
        Err(SuiteError::UnknownChain(name)) if name == "signet"
    ));
}
