//! Common utilities for all binaries
//!
//! Shared CLI parsing, configuration assembly and reporting.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use exactsum_core::config::{FuzzConfig, ProfileName};
use exactsum_core::FuzzReport;
use std::path::PathBuf;

/// Trial shape selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two floats per trial (checks the bridge against hardware addition)
    Pairs,
    /// Three to ten floats per trial
    Sequences,
}

impl From<Mode> for ProfileName {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pairs => ProfileName::Pairs,
            Mode::Sequences => ProfileName::Sequences,
        }
    }
}

/// Common CLI arguments for all binaries
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CommonArgs {
    /// Summation algorithm to check against the oracle
    #[arg(short, long, default_value = "naive")]
    pub algorithm: String,

    /// Trial shape
    #[arg(short, long, value_enum, default_value_t = Mode::Pairs)]
    pub mode: Mode,

    /// Generator seed (random and logged when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of trials
    #[arg(short, long)]
    pub trials: Option<u64>,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CommonArgs {
    /// Assemble the run configuration: profile defaults, then file, then flags
    pub fn fuzz_config(&self) -> Result<FuzzConfig> {
        let mut config = match &self.config {
            Some(path) => FuzzConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ProfileName::from(self.mode).config(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(trials) = self.trials {
            config.trials = trials;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Print final statistics
pub fn print_report(report: &FuzzReport) {
    tracing::info!("=== Fuzz Report ===");
    tracing::info!("Algorithm: {}", report.algorithm);
    tracing::info!("Seed: {}", report.seed);
    tracing::info!("Trials: {}", report.trials);
    tracing::info!("Matched: {}", report.matched);
    tracing::info!("Excluded (all -0.0): {}", report.excluded);
}
