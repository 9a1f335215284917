// Rust guideline compliant 2026-02-23

//! Runner -- builds every consumer wiring, calls its member, and checks the results.
//!
//! Entry points: [`Runner::run_wiring`], [`Runner::run`].
//! Configuration via [`RunnerConfig::builder`].

use domain::{Consumer, Resolution, Wiring};

use crate::adapters::fixed_member::FixedMember;

// ---------------------------------------------------------------------------
// RunnerError
// ---------------------------------------------------------------------------

/// Errors that can occur while running the wirings.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The supplied configuration is invalid.
    #[error("invalid runner configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A consumer returned something other than what its wiring implies.
    #[error("{wiring}: expected {expected}, got {actual}")]
    UnexpectedResult {
        /// Wiring under test.
        wiring: Wiring,
        /// Value the resolved member should have produced.
        expected: bool,
        /// Value `call_member` returned.
        actual: bool,
    },
}

// ---------------------------------------------------------------------------
// RunnerConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`Runner`].
///
/// Construct via [`RunnerConfig::builder`].
#[derive(Debug)]
pub struct RunnerConfig {
    /// Number of `call_member` invocations per consumer (at least 1).
    pub calls_per_consumer: u32,
    /// Value returned by the substituted member.
    pub substitute: bool,
    /// Restrict the run to a single wiring. `None` runs all seven.
    pub only: Option<Wiring>,
}

/// Builder for [`RunnerConfig`].
///
/// Obtain via [`RunnerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct RunnerConfigBuilder {
    calls_per_consumer: u32,
    substitute: bool,
    only: Option<Wiring>,
}

impl RunnerConfig {
    /// Create a builder. `calls_per_consumer` is the only required parameter.
    ///
    /// Default values: `substitute = false`, `only = None`.
    #[must_use]
    pub fn builder(calls_per_consumer: u32) -> RunnerConfigBuilder {
        RunnerConfigBuilder {
            calls_per_consumer,
            // The opposite of the production default, so substitution is visible.
            substitute: false,
            only: None,
        }
    }
}

impl RunnerConfigBuilder {
    /// Override the value returned by the substituted member.
    #[must_use]
    pub fn substitute(mut self, substitute: bool) -> Self {
        self.substitute = substitute;
        self
    }

    /// Run only `wiring`.
    #[must_use]
    pub fn only(mut self, wiring: Wiring) -> Self {
        self.only = Some(wiring);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidConfig`] when `calls_per_consumer` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<RunnerConfig, RunnerError> {
        if self.calls_per_consumer == 0 {
            return Err(RunnerError::InvalidConfig {
                reason: "calls_per_consumer must be >= 1".to_owned(),
            });
        }
        Ok(RunnerConfig {
            calls_per_consumer: self.calls_per_consumer,
            substitute: self.substitute,
            only: self.only,
        })
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// What one consumer did across its calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Resolution state right after construction.
    pub before: Resolution,
    /// Resolution state after the first call.
    pub after: Resolution,
    /// Value of every `call_member`, in order.
    pub results: Vec<bool>,
}

/// Outcome of one wiring, with its default and (when accepted) substituted member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringReport {
    /// Wiring under test.
    pub wiring: Wiring,
    /// Run with the production member.
    pub default_run: RunOutcome,
    /// Run with the stand-in member. `None` for wirings without an injection point.
    pub substitute_run: Option<RunOutcome>,
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Drives every consumer wiring and verifies the values they return.
#[derive(Debug)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a new runner from `config`.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run `wiring` with its default member, then with a [`FixedMember`]
    /// returning `config.substitute` where the wiring accepts one.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::UnexpectedResult`] as soon as a call returns a
    /// value other than the one the resolved member should produce.
    pub fn run_wiring(&self, wiring: Wiring) -> Result<WiringReport, RunnerError> {
        let default_run = self.exercise(injection::with_default(wiring).as_ref(), true)?;

        let substitute = Box::new(FixedMember::new(self.config.substitute));
        let substitute_run = injection::with_substitute(wiring, substitute)
            .map(|consumer| self.exercise(consumer.as_ref(), self.config.substitute))
            .transpose()?;

        Ok(WiringReport { wiring, default_run, substitute_run })
    }

    /// Run every configured wiring in ordinal order.
    ///
    /// # Errors
    ///
    /// Returns the first [`RunnerError::UnexpectedResult`] encountered.
    pub fn run(&self) -> Result<Vec<WiringReport>, RunnerError> {
        let mut reports = vec![];
        for wiring in Wiring::ALL {
            if self.config.only.is_some_and(|only| only != wiring) {
                continue;
            }
            let report = self.run_wiring(wiring)?;
            tracing::info!(
                wiring = %report.wiring,
                substituted = report.substitute_run.is_some(),
                "runner.wiring.passed"
            );
            reports.push(report);
        }
        Ok(reports)
    }

    fn exercise(&self, consumer: &dyn Consumer, expected: bool) -> Result<RunOutcome, RunnerError> {
        let wiring = consumer.wiring();
        let before = consumer.resolution();
        let mut after = before;
        let mut results = Vec::with_capacity(self.config.calls_per_consumer as usize);

        for call in 0..self.config.calls_per_consumer {
            let actual = consumer.call_member();
            if call == 0 {
                after = consumer.resolution();
            }
            tracing::debug!(%wiring, call, actual, ?before, ?after, "runner.call_member");
            if actual != expected {
                return Err(RunnerError::UnexpectedResult { wiring, expected, actual });
            }
            results.push(actual);
        }

        Ok(RunOutcome { before, after, results })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
