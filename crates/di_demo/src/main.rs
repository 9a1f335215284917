// Rust guideline compliant 2026-02-23

//! Dependency-injection wiring demo entry point.
//!
//! Builds every consumer wiring twice (production member, then a stand-in
//! member where the wiring has an injection point), calls each one a few
//! times, and logs what was resolved and returned.
//!
//! # Usage
//!
//! ```text
//! # All seven wirings
//! RUST_LOG=info cargo run
//!
//! # Only wiring 05, with per-call debug output
//! RUST_LOG=debug cargo run -- 5
//! ```

mod adapters;
mod runner;

use anyhow::Context as _;
use domain::Wiring;
use runner::{Runner, RunnerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Three calls per consumer: enough to show lazy defaults are built once.
    let mut builder = RunnerConfig::builder(3).substitute(false);
    if let Some(arg) = std::env::args().nth(1) {
        let ordinal = arg.parse::<u8>().with_context(|| format!("invalid wiring ordinal {arg:?}"))?;
        let wiring = Wiring::from_ordinal(ordinal)
            .with_context(|| format!("no wiring with ordinal {ordinal}, expected 1..=7"))?;
        builder = builder.only(wiring);
    }
    let config = builder.build().context("failed to build runner config")?;

    let reports = Runner::new(config).run().context("wiring run failed")?;

    for report in &reports {
        tracing::info!(
            wiring = %report.wiring,
            before = ?report.default_run.before,
            after = ?report.default_run.after,
            default = ?report.default_run.results,
            substitute = ?report.substitute_run.as_ref().map(|run| &run.results),
            "main.report"
        );
    }
    tracing::info!(wirings = reports.len(), "main.done");

    Ok(())
}
