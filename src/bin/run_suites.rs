// src/bin/run_suites.rs
//! Suite runner — list or run the bundled suites

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use suite_harness::config::{self, Config};
use suite_harness::{default_registry, OutputFormat, RunOptions};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "run-suites", version, about = "Run registered test suites")]
struct Args {
    /// Only run units matching `suite[/case]`, comma-separated; `*` matches any name
    #[arg(long = "run-test", value_name = "FILTER")]
    run_test: Option<String>,

    /// Run disabled suites and cases too
    #[arg(long)]
    run_disabled: bool,

    /// TOML config file (defaults to $SUITE_CONFIG or suite-config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print registered suites and cases, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut conf: Config = match &args.config {
        Some(path) => config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load().clone(),
    };
    if args.config.is_some() {
        config::apply_env_overrides(&mut conf);
    }

    suite_harness::logging::init(&conf.logging.filter);

    let registry = default_registry().context("Failed to register bundled suites")?;

    if args.list {
        for suite in registry.units() {
            let flag = if suite.disabled { " [disabled]" } else { "" };
            println!("{}{}", suite.name, flag);
            for case in suite.cases {
                let flag = if case.disabled { " [disabled]" } else { "" };
                println!("  {}{}", case.name, flag);
            }
        }
        return Ok(());
    }

    // --run-test wins; the config filter is only parsed when it is absent
    let mut options = RunOptions::from_config_with_filter(&conf, args.run_test.as_deref())
        .with_context(|| match &args.run_test {
            Some(filter) => format!("Invalid --run-test filter `{filter}`"),
            None => "Invalid run_test in config".to_owned(),
        })?;
    options.run_disabled |= args.run_disabled;

    info!(suites = registry.len(), run_disabled = options.run_disabled, "starting test run");
    let report = registry.run(&options)?;

    match args.format.unwrap_or(conf.run.format) {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    let summary = report.summary();
    if !report.passed() {
        bail!("{} test case(s) failed", summary.cases_failed);
    }
    Ok(())
}
